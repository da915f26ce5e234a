//! ARN bucket addressing tests: access points, Outposts, Object Lambda, and
//! Multi-Region Access Points.

#[cfg(test)]
mod tests {
    use routestack_core::{AuthScheme, EndpointError};
    use routestack_s3::{EndpointParams, resolve_endpoint};

    use crate::{region_bucket, resolve_err, resolve_ok};

    const AP_ARN: &str = "arn:aws:s3:us-west-2:123456789012:accesspoint:myap";
    const MRAP_ARN: &str = "arn:aws:s3::123456789012:accesspoint:mfzwi23gnjvgw.mrap";
    const OUTPOST_ARN: &str =
        "arn:aws:s3-outposts:us-west-2:123456789012:outpost:op-01234567890123456:accesspoint:myaccesspoint";

    // -----------------------------------------------------------------------
    // Access points
    // -----------------------------------------------------------------------

    #[test]
    fn test_should_resolve_access_point_arn() {
        let endpoint = resolve_ok(&region_bucket("us-west-2", AP_ARN));
        assert_eq!(
            endpoint.url,
            "https://myap-123456789012.s3-accesspoint.us-west-2.amazonaws.com"
        );
        assert_eq!(endpoint.auth_schemes, vec![AuthScheme::sigv4("s3", "us-west-2")]);
    }

    #[test]
    fn test_should_sign_for_arn_region_on_cross_region_access() {
        let arn = "arn:aws:s3:us-east-1:123456789012:accesspoint:myap";
        let endpoint = resolve_ok(&region_bucket("us-west-2", arn));
        assert_eq!(
            endpoint.url,
            "https://myap-123456789012.s3-accesspoint.us-east-1.amazonaws.com"
        );
        assert_eq!(endpoint.auth_schemes, vec![AuthScheme::sigv4("s3", "us-east-1")]);

        let params = EndpointParams::builder()
            .region("us-west-2")
            .bucket(arn)
            .use_arn_region(true)
            .build();
        assert_eq!(
            resolve_ok(&params).url,
            "https://myap-123456789012.s3-accesspoint.us-east-1.amazonaws.com"
        );
    }

    #[test]
    fn test_should_resolve_dualstack_access_point() {
        let params = EndpointParams::builder()
            .region("us-west-2")
            .bucket(AP_ARN)
            .use_dual_stack(true)
            .build();
        assert_eq!(
            resolve_ok(&params).url,
            "https://myap-123456789012.s3-accesspoint.dualstack.us-west-2.amazonaws.com"
        );
    }

    #[test]
    fn test_should_resolve_fips_access_point_in_govcloud() {
        let params = EndpointParams::builder()
            .region("us-gov-east-1")
            .bucket("arn:aws-us-gov:s3:us-gov-east-1:123456789012:accesspoint:myap")
            .use_fips(true)
            .build();
        assert_eq!(
            resolve_ok(&params).url,
            "https://myap-123456789012.s3-accesspoint-fips.us-gov-east-1.amazonaws.com"
        );
    }

    #[test]
    fn test_should_reject_access_point_with_missing_account() {
        let message = resolve_err(&region_bucket(
            "us-west-2",
            "arn:aws:s3:us-west-2::accesspoint:myap",
        ));
        assert_eq!(
            message,
            "Invalid ARN: The account id may only contain a-z, A-Z, 0-9 and `-`. Found: ``"
        );
    }

    #[test]
    fn test_should_reject_access_point_without_name() {
        let message = resolve_err(&region_bucket(
            "us-west-2",
            "arn:aws:s3:us-west-2:123456789012:accesspoint",
        ));
        assert_eq!(
            message,
            "Invalid ARN: Expected a resource of the format `accesspoint:<accesspoint name>` \
             but no name was provided"
        );
    }

    #[test]
    fn test_should_reject_access_point_with_extra_resource_components() {
        let message = resolve_err(&region_bucket(
            "us-west-2",
            "arn:aws:s3:us-west-2:123456789012:accesspoint:myap:object:foo",
        ));
        assert_eq!(
            message,
            "Invalid ARN: The ARN may only contain a single resource component after \
             `accesspoint`."
        );
    }

    #[test]
    fn test_should_reject_access_point_with_accelerate() {
        let params = EndpointParams::builder()
            .region("us-west-2")
            .bucket(AP_ARN)
            .accelerate(true)
            .build();
        assert_eq!(resolve_err(&params), "Access Points do not support S3 Accelerate");
    }

    #[test]
    fn test_should_reject_access_point_when_disabled() {
        let params = EndpointParams::builder()
            .region("us-west-2")
            .bucket(AP_ARN)
            .disable_access_points(true)
            .build();
        assert_eq!(resolve_err(&params), "Access points are not supported for this operation");
    }

    #[test]
    fn test_should_reject_cross_partition_access_point() {
        let params = EndpointParams::builder()
            .region("us-west-2")
            .bucket("arn:aws-cn:s3:cn-north-1:123456789012:accesspoint:myap")
            .use_arn_region(true)
            .build();
        assert_eq!(
            resolve_err(&params),
            "Client was configured for partition `aws` but ARN \
             (`arn:aws-cn:s3:cn-north-1:123456789012:accesspoint:myap`) has `aws-cn`"
        );
    }

    #[test]
    fn test_should_reject_path_style_with_arn_bucket() {
        let params = EndpointParams::builder()
            .region("us-west-2")
            .bucket(AP_ARN)
            .force_path_style(true)
            .build();
        let err = resolve_endpoint(&params).unwrap_err();
        assert_eq!(err.to_string(), "Path-style addressing cannot be used with ARN buckets");
        assert!(matches!(err, EndpointError::InvalidConfiguration { .. }));
    }

    // -----------------------------------------------------------------------
    // Multi-Region Access Points
    // -----------------------------------------------------------------------

    #[test]
    fn test_should_resolve_mrap_with_global_sigv4a() {
        let endpoint = resolve_ok(&region_bucket("us-west-2", MRAP_ARN));
        assert_eq!(
            endpoint.url,
            "https://mfzwi23gnjvgw.mrap.accesspoint.s3-global.amazonaws.com"
        );
        assert_eq!(endpoint.auth_schemes, vec![AuthScheme::sigv4a_global("s3")]);
    }

    #[test]
    fn test_should_reject_mrap_when_disabled() {
        let params = EndpointParams::builder()
            .region("us-west-2")
            .bucket(MRAP_ARN)
            .disable_multi_region_access_points(true)
            .build();
        assert_eq!(
            resolve_err(&params),
            "Invalid configuration: Multi-Region Access Point ARNs are disabled."
        );
    }

    #[test]
    fn test_should_reject_mrap_with_dualstack() {
        let params = EndpointParams::builder()
            .region("us-west-2")
            .bucket(MRAP_ARN)
            .use_dual_stack(true)
            .build();
        assert_eq!(resolve_err(&params), "S3 MRAP does not support dual-stack");
    }

    // -----------------------------------------------------------------------
    // Outposts
    // -----------------------------------------------------------------------

    #[test]
    fn test_should_resolve_outpost_access_point_arn() {
        let endpoint = resolve_ok(&region_bucket("us-west-2", OUTPOST_ARN));
        assert_eq!(
            endpoint.url,
            "https://myaccesspoint-123456789012.op-01234567890123456.s3-outposts.us-west-2.amazonaws.com"
        );
        assert_eq!(
            endpoint.auth_schemes,
            vec![
                AuthScheme::sigv4a_global("s3-outposts"),
                AuthScheme::sigv4("s3-outposts", "us-west-2"),
            ]
        );
    }

    #[test]
    fn test_should_resolve_outpost_arn_with_slash_separators() {
        let endpoint = resolve_ok(&region_bucket(
            "us-west-2",
            "arn:aws:s3-outposts:us-west-2:123456789012:outpost/op-01234567890123456/accesspoint/myaccesspoint",
        ));
        assert_eq!(
            endpoint.url,
            "https://myaccesspoint-123456789012.op-01234567890123456.s3-outposts.us-west-2.amazonaws.com"
        );
    }

    #[test]
    fn test_should_reject_outposts_with_fips() {
        let params = EndpointParams::builder()
            .region("us-west-2")
            .bucket(OUTPOST_ARN)
            .use_fips(true)
            .build();
        assert_eq!(resolve_err(&params), "S3 Outposts does not support FIPS");
    }

    #[test]
    fn test_should_reject_invalid_outpost_id() {
        let message = resolve_err(&region_bucket(
            "us-west-2",
            "arn:aws:s3-outposts:us-west-2:123456789012:outpost:op_0123456:accesspoint:myap",
        ));
        assert_eq!(
            message,
            "Invalid ARN: The outpost Id may only contain a-z, A-Z, 0-9 and `-`. Found: \
             `op_0123456`"
        );
    }

    #[test]
    fn test_should_reject_outpost_arn_with_wrong_subresource() {
        let message = resolve_err(&region_bucket(
            "us-west-2",
            "arn:aws:s3-outposts:us-west-2:123456789012:outpost:op-01234567890123456:bucket:mybucket",
        ));
        assert_eq!(message, "Expected an outpost type `accesspoint`, found bucket");
    }

    // -----------------------------------------------------------------------
    // Object Lambda
    // -----------------------------------------------------------------------

    #[test]
    fn test_should_resolve_object_lambda_access_point() {
        let endpoint = resolve_ok(&region_bucket(
            "us-west-2",
            "arn:aws:s3-object-lambda:us-west-2:123456789012:accesspoint:mybanner",
        ));
        assert_eq!(
            endpoint.url,
            "https://mybanner-123456789012.s3-object-lambda.us-west-2.amazonaws.com"
        );
        assert_eq!(
            endpoint.auth_schemes,
            vec![AuthScheme::sigv4("s3-object-lambda", "us-west-2")]
        );
    }

    #[test]
    fn test_should_reject_object_lambda_arn_without_region() {
        let message = resolve_err(&region_bucket(
            "us-west-2",
            "arn:aws:s3-object-lambda::123456789012:accesspoint:banner",
        ));
        assert_eq!(message, "Invalid ARN: bucket ARN is missing a region");
    }

    #[test]
    fn test_should_resolve_object_lambda_fips() {
        let params = EndpointParams::builder()
            .region("us-gov-east-1")
            .bucket("arn:aws-us-gov:s3-object-lambda:us-gov-east-1:123456789012:accesspoint:mybanner")
            .use_fips(true)
            .build();
        assert_eq!(
            resolve_ok(&params).url,
            "https://mybanner-123456789012.s3-object-lambda-fips.us-gov-east-1.amazonaws.com"
        );
    }

    // -----------------------------------------------------------------------
    // Malformed and unsupported ARNs
    // -----------------------------------------------------------------------

    #[test]
    fn test_should_name_service_of_unsupported_arn() {
        let message = resolve_err(&region_bucket(
            "us-west-2",
            "arn:aws:sqs:us-west-2:123456789012:myqueue",
        ));
        assert_eq!(
            message,
            "Invalid ARN: Unrecognized format: arn:aws:sqs:us-west-2:123456789012:myqueue \
             (type: myqueue)"
        );
    }

    #[test]
    fn test_should_reject_unparseable_arn_looking_bucket() {
        let message = resolve_err(&region_bucket("us-west-2", "arn:not:valid"));
        assert_eq!(message, "Invalid ARN: `arn:not:valid` was not a valid ARN");
    }

    #[test]
    fn test_should_classify_arn_errors() {
        let params = region_bucket("us-west-2", "arn:not:valid");
        assert!(matches!(
            resolve_endpoint(&params).unwrap_err(),
            EndpointError::InvalidArn { .. }
        ));
    }
}
