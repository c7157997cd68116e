fn main() -> anyhow::Result<()> {
    wiki_animals::cli::run()
}
