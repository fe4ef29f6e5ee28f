//! URL safety policy
//!
//! The host decides which URLs may reach the rendered output. Every
//! caller-supplied URL (images, video, logo) passes through the policy
//! before it is used; rejected URLs are dropped, never rewritten.

/// Predicate deciding whether a URL may be rendered
pub trait UrlPolicy {
    fn is_safe(&self, url: &str) -> bool;
}

impl<F> UrlPolicy for F
where
    F: Fn(&str) -> bool,
{
    fn is_safe(&self, url: &str) -> bool {
        self(url)
    }
}

/// Policy that accepts every URL
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowAll;

impl UrlPolicy for AllowAll {
    fn is_safe(&self, _url: &str) -> bool {
        true
    }
}

/// Keep the URLs the policy accepts, in order.
pub fn filter_safe<'a, P, I>(policy: &P, urls: I) -> Vec<String>
where
    P: UrlPolicy + ?Sized,
    I: IntoIterator<Item = &'a String>,
{
    urls.into_iter()
        .filter(|url| {
            let safe = policy.is_safe(url);
            if !safe {
                tracing::trace!(url = %url, "url rejected by policy");
            }
            safe
        })
        .cloned()
        .collect()
}
