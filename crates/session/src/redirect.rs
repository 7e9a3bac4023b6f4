//! Login-application redirect URLs

use url::Url;

/// Query parameter carrying the post-login bounce-back target.
pub const REDIRECT_PARAM: &str = "redirect";

/// Build the login-application URL that bounces back to `return_to`.
pub fn login_redirect_url(login_base: &str, return_to: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(login_base)?;
    if !return_to.is_empty() {
        url.query_pairs_mut().append_pair(REDIRECT_PARAM, return_to);
    }
    Ok(url)
}
