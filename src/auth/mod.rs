/// Client credentials and the `/auth` token exchange.
pub mod credentials;
/// Single-slot rotating access token.
pub mod token;
