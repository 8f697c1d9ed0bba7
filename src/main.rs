mod eval;
mod parse;
mod prompt;

fn main() -> anyhow::Result<()> {
    prompt::run()
}
