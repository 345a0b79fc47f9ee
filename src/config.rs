use std::path::PathBuf;
use clap::Parser;

#[derive(Parser, Clone)]
#[command(about = "Relays tour reservation forms to WhatsApp")]
pub struct Config {
    /// Twilio account SID
    #[clap(env, long)]
    pub twilio_sid: String,

    /// Twilio auth token
    #[clap(env, long, hide_env_values = true)]
    pub twilio_token: String,

    /// Sender address, e.g. `whatsapp:+14155238886`
    #[clap(env, long)]
    pub twilio_from: String,

    /// Address every reservation is forwarded to
    #[clap(env, long)]
    pub owner_phone: String,

    #[clap(env, long, default_value_t = 3000)]
    pub port: u16,

    /// Directory served verbatim for every path not claimed by the API
    #[clap(env, long, default_value = "public")]
    pub public_dir: PathBuf,

    #[clap(env, long, default_value = "https://api.twilio.com")]
    pub twilio_api_url: String,
}
