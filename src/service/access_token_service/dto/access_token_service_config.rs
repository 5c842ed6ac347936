pub struct AccessTokenServiceConfig {
    pub scope: String,
}
