pub trait Configuration: Clone + Send + Sync + 'static {
    fn port(&self) -> String;
    fn database_url(&self) -> Option<String>;
    fn admin_username(&self) -> String;
    fn admin_password(&self) -> String;
    fn access_token(&self) -> String;
}
