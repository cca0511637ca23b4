mod command;
mod render;

fn main() -> anyhow::Result<()> {
    command::run()
}
