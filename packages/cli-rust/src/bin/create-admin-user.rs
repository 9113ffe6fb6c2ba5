fn main() -> anyhow::Result<()> {
    irta_admin_setup::run()
}
