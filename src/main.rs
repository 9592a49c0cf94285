fn main() -> anyhow::Result<()> {
    isochrone_viewer::cli::run()
}
