use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// GitHub username to analyze (prompted for when omitted)
    #[clap(short, long)]
    pub username: Option<String>,

    /// Personal access token (prompted for when omitted)
    #[clap(short, long)]
    pub token: Option<String>,

    /// Show the pie chart without asking
    #[clap(long, conflicts_with = "no-chart")]
    pub chart: bool,

    /// Skip the pie chart prompt entirely
    #[clap(long)]
    pub no_chart: bool,
}

pub fn get_args() -> Args {
    Args::parse()
}
