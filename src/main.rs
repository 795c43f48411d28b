fn main() -> anyhow::Result<()> {
    dump_converter::cli::run()
}
