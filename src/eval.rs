use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub is_prime: bool,
    pub message: String,
}

impl Verdict {
    fn prime(message: String) -> Self {
        Self {
            is_prime: true,
            message,
        }
    }

    fn not_prime(message: String) -> Self {
        Self {
            is_prime: false,
            message,
        }
    }
}

/// Decides whether `n` is prime and explains why.
///
/// Composite numbers report their smallest divisor, found by scanning
/// `2..=n / 2` in ascending order. The scan is linear in `n`: a prime
/// near `i64::MAX` takes about 4.6e18 steps before it is reported.
pub fn eval(n: i64) -> Verdict {
    match n {
        i64::MIN..=-1 => {
            Verdict::not_prime("Negative numbers are not prime, by definition!".to_string())
        }
        0 | 1 => Verdict::not_prime(format!("{} is not prime, by definition!", n)),
        2 => Verdict::prime(format!("{} is a prime number!", n)),
        n => match smallest_divisor(n) {
            Some(d) => Verdict::not_prime(format!(
                "{} is not a prime number because it is divisible by {}!",
                n, d
            )),
            None => Verdict::prime(format!("{} is a prime number!", n)),
        },
    }
}

fn smallest_divisor(n: i64) -> Option<i64> {
    (2..=n / 2).find(|d| n % d == 0)
}

impl Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
