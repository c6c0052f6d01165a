use anyhow::Result;

#[derive(Debug, Clone)]
pub struct Config {
    // PokeAPI
    pub api_base_url: Option<String>,

    // Identifier range for random draws
    pub max_pokemon_id: u32,

    // HTTP
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // PokeAPI - base address; checked per request, not at startup,
            // so a missing value aborts fetches instead of the process
            api_base_url: std::env::var("POKEAPI_BASE_URL").ok(),

            // Identifier range
            max_pokemon_id: std::env::var("POKEQUIZ_MAX_POKEMON_ID")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(898),

            // HTTP
            http_timeout_secs: std::env::var("POKEQUIZ_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        })
    }
}
