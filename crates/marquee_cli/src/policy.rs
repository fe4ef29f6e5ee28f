//! Scheme and host based URL policy

use crate::config::PolicyConfig;
use marquee_overlay::UrlPolicy;

/// Accepts `https://`, protocol-relative `//` and, when enabled, `http://`
/// and `data:image/` URLs. Everything else (`javascript:`, `data:text/html`,
/// relative paths) is rejected.
#[derive(Debug, Clone)]
pub struct SchemePolicy {
    allow_http: bool,
    allow_data_images: bool,
    allowed_hosts: Vec<String>,
}

impl SchemePolicy {
    pub fn from_config(config: &PolicyConfig) -> Self {
        Self {
            allow_http: config.allow_http,
            allow_data_images: config.allow_data_images,
            allowed_hosts: config
                .allowed_hosts
                .iter()
                .map(|host| host.to_ascii_lowercase())
                .collect(),
        }
    }

    fn host_allowed(&self, rest: &str) -> bool {
        if self.allowed_hosts.is_empty() {
            return true;
        }
        // Browsers end the authority at a backslash too.
        let authority = rest.split(['/', '\\', '?', '#']).next().unwrap_or_default();
        let host = authority.rsplit('@').next().unwrap_or(authority);
        let host = host.split(':').next().unwrap_or(host).to_ascii_lowercase();
        self.allowed_hosts
            .iter()
            .any(|allowed| host == *allowed || host.ends_with(&format!(".{allowed}")))
    }
}

impl Default for SchemePolicy {
    fn default() -> Self {
        Self::from_config(&PolicyConfig::default())
    }
}

impl UrlPolicy for SchemePolicy {
    fn is_safe(&self, url: &str) -> bool {
        let url = url.trim();
        let lower = url.to_ascii_lowercase();

        if let Some(rest) = lower.strip_prefix("https://") {
            return self.host_allowed(rest);
        }
        if let Some(rest) = lower.strip_prefix("http://") {
            return self.allow_http && self.host_allowed(rest);
        }
        if let Some(rest) = lower.strip_prefix("//") {
            return self.host_allowed(rest);
        }
        self.allow_data_images && lower.starts_with("data:image/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = SchemePolicy::default();
        assert!(policy.is_safe("https://cdn.example.com/a.png"));
        assert!(policy.is_safe("http://cdn.example.com/a.png"));
        assert!(policy.is_safe("//cdn.example.com/a.png"));
        assert!(policy.is_safe("data:image/png;base64,AAAA"));
        assert!(!policy.is_safe("javascript:alert(1)"));
        assert!(!policy.is_safe(" JavaScript:alert(1)"));
        assert!(!policy.is_safe("data:text/html,<script>"));
        assert!(!policy.is_safe("/relative/path.png"));
    }

    #[test]
    fn test_host_allowlist() {
        let policy = SchemePolicy::from_config(&PolicyConfig {
            allow_http: false,
            allow_data_images: false,
            allowed_hosts: vec!["example.com".to_string()],
        });
        assert!(policy.is_safe("https://example.com/a.png"));
        assert!(policy.is_safe("https://cdn.example.com:8443/a.png"));
        assert!(!policy.is_safe("https://example.com.evil.net/a.png"));
        assert!(!policy.is_safe("https://user@evil.net/a.png"));
        assert!(!policy.is_safe("https://evil.net\\@cdn.example.com/a.png"));
        assert!(!policy.is_safe("//evil.net\\@example.com/a.png"));
        assert!(policy.is_safe("https://cdn.example.com\\a.png"));
        assert!(!policy.is_safe("http://example.com/a.png"));
        assert!(!policy.is_safe("data:image/png;base64,AAAA"));
    }
}
