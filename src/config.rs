/// Runtime configuration, built once at startup from CLI flags and
/// environment variables, then passed by reference into the generator
/// and publisher constructors. Nothing reads the environment after this.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot credential, embedded in the `sendPoll` URL path.
    pub bot_token: String,
    /// Destination chat for every published poll.
    pub chat_id: String,
    /// Gemini API key, sent as a query parameter.
    pub gemini_api_key: String,
    /// Gemini model used for question generation.
    pub model: String,
    /// HTTP listening port.
    pub port: u16,
}
