fn main() -> anyhow::Result<()> {
    evecore::app::run()
}
