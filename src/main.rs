fn main() -> anyhow::Result<()> {
    cardwalk::runner::run()
}
