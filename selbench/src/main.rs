fn main() -> anyhow::Result<()> {
    selbench::run()
}
