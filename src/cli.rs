use clap::Parser;
use std::path::PathBuf;

/// Make sure the listed users exist as admins (active, staff and superuser).
///
/// The batch source is, in order of precedence: `--email`, `--userlist-path`,
/// then the `PROMOTE_TO_ADMINS` setting.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "promote-admins", version)]
pub struct Cli {
    /// Email of a single user to promote. Overrides every other batch source.
    #[arg(long, value_name = "ADDR")]
    pub email: Option<String>,

    /// New password for the `--email` user (optional).
    #[arg(long = "pass", value_name = "SECRET")]
    pub new_password: Option<String>,

    /// JSON file with an array of {"email", "new_password"} objects.
    #[arg(long, value_name = "PATH")]
    pub userlist_path: Option<PathBuf>,

    /// Exit with a non-zero status if any user failed to be promoted.
    #[arg(long)]
    pub fail_on_error: bool,
}
