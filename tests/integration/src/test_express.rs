//! S3 Express bucket addressing tests (zonal aliases, control endpoint,
//! session auth) and Outposts bucket aliases.

#[cfg(test)]
mod tests {
    use routestack_core::{ATTR_BACKEND, AuthScheme};
    use routestack_s3::EndpointParams;

    use crate::{region_bucket, resolve_err, resolve_ok};

    const EXPRESS_BUCKET: &str = "mybucket--use1-az1--x-s3";
    const OUTPOST_ALIAS: &str = "test-accessp-o0b1d075431d83bebde8xz5w8ijx1qzlbp3i3kuse10--op-s3";

    #[test]
    fn test_should_resolve_zonal_express_bucket() {
        let endpoint = resolve_ok(&region_bucket("us-east-1", EXPRESS_BUCKET));
        assert_eq!(
            endpoint.url,
            "https://mybucket--use1-az1--x-s3.s3express-use1-az1.us-east-1.amazonaws.com"
        );
        assert_eq!(endpoint.attributes.get(ATTR_BACKEND).map(String::as_str), Some("S3Express"));
        assert_eq!(
            endpoint.auth_schemes,
            vec![AuthScheme::s3_express_session("s3express", "us-east-1")]
        );
    }

    #[test]
    fn test_should_insert_fips_into_express_host() {
        let params = EndpointParams::builder()
            .region("us-east-1")
            .bucket(EXPRESS_BUCKET)
            .use_fips(true)
            .build();
        assert_eq!(
            resolve_ok(&params).url,
            "https://mybucket--use1-az1--x-s3.s3express-fips-use1-az1.us-east-1.amazonaws.com"
        );
    }

    #[test]
    fn test_should_resolve_express_control_endpoint() {
        let params = EndpointParams::builder()
            .region("us-east-1")
            .bucket(EXPRESS_BUCKET)
            .use_s3_express_control_endpoint(true)
            .build();
        let endpoint = resolve_ok(&params);
        assert_eq!(
            endpoint.url,
            "https://s3express-control.us-east-1.amazonaws.com/mybucket--use1-az1--x-s3"
        );
        assert_eq!(endpoint.auth_schemes, vec![AuthScheme::sigv4("s3express", "us-east-1")]);
    }

    #[test]
    fn test_should_fall_back_to_sigv4_when_session_auth_disabled() {
        let params = EndpointParams::builder()
            .region("us-east-1")
            .bucket(EXPRESS_BUCKET)
            .disable_s3_express_session_auth(true)
            .build();
        let endpoint = resolve_ok(&params);
        assert_eq!(
            endpoint.url,
            "https://mybucket--use1-az1--x-s3.s3express-use1-az1.us-east-1.amazonaws.com"
        );
        assert_eq!(endpoint.auth_schemes, vec![AuthScheme::sigv4("s3express", "us-east-1")]);
    }

    #[test]
    fn test_should_keep_session_auth_on_express_custom_endpoint() {
        let params = EndpointParams::builder()
            .region("us-east-1")
            .bucket(EXPRESS_BUCKET)
            .endpoint("https://custom.example.com")
            .build();
        let endpoint = resolve_ok(&params);
        assert_eq!(endpoint.url, "https://mybucket--use1-az1--x-s3.custom.example.com");
        assert_eq!(endpoint.attributes.get(ATTR_BACKEND).map(String::as_str), Some("S3Express"));
        assert_eq!(
            endpoint.auth_schemes,
            vec![AuthScheme::s3_express_session("s3express", "us-east-1")]
        );
    }

    #[test]
    fn test_should_reject_express_with_accelerate() {
        let params = EndpointParams::builder()
            .region("us-east-1")
            .bucket(EXPRESS_BUCKET)
            .accelerate(true)
            .build();
        assert_eq!(resolve_err(&params), "S3Express does not support S3 Accelerate.");
    }

    #[test]
    fn test_should_reject_unhostable_express_bucket_name() {
        let message = resolve_err(&region_bucket("us-east-1", "MYBUCKET--use1-az1--x-s3"));
        assert_eq!(message, "S3Express bucket name is not a valid virtual hostable name.");
    }

    #[test]
    fn test_should_resolve_outpost_bucket_alias() {
        let endpoint = resolve_ok(&region_bucket("us-east-1", OUTPOST_ALIAS));
        assert_eq!(
            endpoint.url,
            "https://test-accessp-o0b1d075431d83bebde8xz5w8ijx1qzlbp3i3kuse10--op-s3.op-0b1d075431d83bebd.s3-outposts.us-east-1.amazonaws.com"
        );
        assert_eq!(
            endpoint.auth_schemes,
            vec![
                AuthScheme::sigv4a_global("s3-outposts"),
                AuthScheme::sigv4("s3-outposts", "us-east-1"),
            ]
        );
    }

    #[test]
    fn test_should_resolve_outpost_bucket_alias_regardless_of_fips() {
        // Outposts aliases route to the outpost itself; the FIPS flag does
        // not change the host.
        let params = EndpointParams::builder()
            .region("us-east-1")
            .bucket(OUTPOST_ALIAS)
            .use_fips(true)
            .build();
        assert_eq!(
            resolve_ok(&params).url,
            "https://test-accessp-o0b1d075431d83bebde8xz5w8ijx1qzlbp3i3kuse10--op-s3.op-0b1d075431d83bebd.s3-outposts.us-east-1.amazonaws.com"
        );
    }
}
