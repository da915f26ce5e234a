//! Custom endpoint tests: pass-through, virtual hosting against the custom
//! authority, IP literals, and the combinations a custom endpoint forbids.

#[cfg(test)]
mod tests {
    use routestack_core::AuthScheme;
    use routestack_s3::EndpointParams;

    use crate::{resolve_err, resolve_ok};

    fn with_endpoint(bucket: Option<&str>, endpoint: &str) -> EndpointParams {
        let mut params = EndpointParams::builder().region("us-west-2").endpoint(endpoint).build();
        params.bucket = bucket.map(ToOwned::to_owned);
        params
    }

    #[test]
    fn test_should_prepend_bucket_to_custom_authority() {
        let params = with_endpoint(Some("my-bucket"), "https://example.com");
        let endpoint = resolve_ok(&params);
        assert_eq!(endpoint.url, "https://my-bucket.example.com");
        assert_eq!(endpoint.auth_schemes, vec![AuthScheme::sigv4("s3", "us-west-2")]);
    }

    #[test]
    fn test_should_keep_custom_port_in_host() {
        let params = with_endpoint(Some("my-bucket"), "https://example.com:8443");
        assert_eq!(resolve_ok(&params).url, "https://my-bucket.example.com:8443");
    }

    #[test]
    fn test_should_use_path_style_for_unhostable_bucket_on_custom_endpoint() {
        let params = with_endpoint(Some("not..virtual..hostable"), "http://example.com");
        assert_eq!(resolve_ok(&params).url, "http://example.com/not..virtual..hostable");
    }

    #[test]
    fn test_should_use_path_style_for_ip_endpoint() {
        let params = with_endpoint(Some("my-bucket"), "http://192.168.1.1:9000");
        assert_eq!(resolve_ok(&params).url, "http://192.168.1.1:9000/my-bucket");
    }

    #[test]
    fn test_should_pass_through_bucketless_custom_endpoint() {
        let params = with_endpoint(None, "https://example.com");
        assert_eq!(resolve_ok(&params).url, "https://example.com");
    }

    #[test]
    fn test_should_reject_dualstack_with_custom_endpoint() {
        let mut params = with_endpoint(Some("my-bucket"), "https://example.com");
        params.use_dual_stack = Some(true);
        assert_eq!(
            resolve_err(&params),
            "Cannot set dual-stack in combination with a custom endpoint."
        );
    }

    #[test]
    fn test_should_reject_fips_with_custom_endpoint() {
        let mut params = with_endpoint(None, "https://example.com");
        params.use_fips = Some(true);
        assert_eq!(resolve_err(&params), "A custom endpoint cannot be combined with FIPS");
    }

    #[test]
    fn test_should_reject_accelerate_with_custom_endpoint() {
        let mut params = with_endpoint(None, "https://example.com");
        params.accelerate = Some(true);
        assert_eq!(
            resolve_err(&params),
            "A custom endpoint cannot be combined with S3 Accelerate"
        );
    }

    #[test]
    fn test_should_reject_endpoint_with_invalid_port() {
        let params = with_endpoint(Some("my-bucket"), "https://example.com:bad-port");
        assert_eq!(
            resolve_err(&params),
            "Custom endpoint `https://example.com:bad-port` was not a valid URI"
        );
    }

    #[test]
    fn test_should_reject_endpoint_with_query_string() {
        let params = with_endpoint(Some("my-bucket"), "https://example.com?foo=bar");
        assert_eq!(
            resolve_err(&params),
            "Custom endpoint `https://example.com?foo=bar` was not a valid URI"
        );
    }
}
