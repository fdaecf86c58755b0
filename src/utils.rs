use url::Url;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

// Hosts whose links are images even without a file extension in the path.
const KNOWN_IMAGE_HOSTS: &[&str] = &["imgur.com", "i.redd.it", "picsum.photos"];

/// Whether pasted text should be treated as an image URL worth uploading.
pub fn is_image_url(text: &str) -> bool {
    let Ok(parsed) = Url::parse(text) else {
        return false;
    };

    if !matches!(parsed.scheme(), "http" | "https") {
        return false;
    }

    let path = parsed.path().to_ascii_lowercase();
    if IMAGE_EXTENSIONS
        .iter()
        .any(|ext| path.ends_with(&format!(".{}", ext)))
    {
        return true;
    }

    parsed
        .host_str()
        .map(|host| {
            KNOWN_IMAGE_HOSTS
                .iter()
                .any(|known| host == *known || host.ends_with(&format!(".{}", known)))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_image_extensions_are_recognized() {
        assert!(is_image_url("https://example.com/photo.jpg"));
        assert!(is_image_url("https://example.com/photo.JPEG"));
        assert!(is_image_url("http://example.com/a/b/c.webp"));
        assert!(is_image_url("https://example.com/pic.png?width=300"));
    }

    #[test]
    fn test_known_image_hosts_pass_without_extension() {
        assert!(is_image_url("https://i.imgur.com/abc123"));
        assert!(is_image_url("https://imgur.com/gallery/xyz"));
        assert!(is_image_url("https://i.redd.it/abc"));
        assert!(is_image_url("https://picsum.photos/200/300"));
    }

    #[test]
    fn test_non_image_urls_are_rejected() {
        assert!(!is_image_url("https://example.com/page.html"));
        assert!(!is_image_url("https://example.com/"));
    }

    #[test]
    fn test_non_urls_are_rejected() {
        assert!(!is_image_url("not a url"));
        assert!(!is_image_url("photo.png"));
        assert!(!is_image_url(""));
    }

    #[test]
    fn test_non_http_schemes_are_rejected() {
        assert!(!is_image_url("file:///home/user/photo.png"));
        assert!(!is_image_url("ftp://example.com/photo.png"));
    }
}
