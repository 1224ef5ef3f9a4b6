use anyhow::Result;
use reset_users::reset;

fn main() -> Result<()> {
    // Overwrite .users.json with the single admin account
    reset::reset_users_file()
}
