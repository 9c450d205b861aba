use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Ansible dynamic inventory for Rancher")]
pub struct Args {
    /// Print the full inventory document.
    #[arg(long)]
    pub list: bool,

    /// Accepted for the dynamic-inventory contract; per-host variables are
    /// served through `_meta.hostvars` in the `--list` output instead.
    #[arg(long, value_name = "HOSTNAME")]
    pub host: Option<String>,
}
