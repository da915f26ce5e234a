//! Determinism and caching tests: identical parameters always resolve to
//! structurally identical results.

#[cfg(test)]
mod tests {
    use routestack_s3::{CachedResolver, EndpointParams, resolve_endpoint};

    fn interesting_params() -> Vec<EndpointParams> {
        let buckets = [
            None,
            Some("my-bucket"),
            Some("not..virtual..hostable"),
            Some("arn:aws:s3:us-west-2:123456789012:accesspoint:myap"),
            Some("arn:aws:s3::123456789012:accesspoint:mfzwi23gnjvgw.mrap"),
            Some("mybucket--use1-az1--x-s3"),
            Some("arn:aws:s3:::bucket"),
        ];
        let mut sets = Vec::new();
        for bucket in buckets {
            for fips in [false, true] {
                for dual_stack in [false, true] {
                    let mut params = EndpointParams::builder()
                        .region("us-west-2")
                        .use_fips(fips)
                        .use_dual_stack(dual_stack)
                        .build();
                    params.bucket = bucket.map(ToOwned::to_owned);
                    sets.push(params);
                }
            }
        }
        sets
    }

    #[test]
    fn test_should_resolve_identically_on_repeat_calls() {
        for params in interesting_params() {
            let first = resolve_endpoint(&params);
            let second = resolve_endpoint(&params);
            assert_eq!(first, second, "non-deterministic result for {params:?}");
        }
    }

    #[test]
    fn test_should_match_cached_and_uncached_results() {
        let resolver = CachedResolver::new();
        for params in interesting_params() {
            let direct = resolve_endpoint(&params);
            let cached_cold = resolver.resolve(&params);
            let cached_warm = resolver.resolve(&params);
            assert_eq!(direct, cached_cold, "cache diverged for {params:?}");
            assert_eq!(cached_cold, cached_warm, "warm hit diverged for {params:?}");
        }
        assert_eq!(resolver.len(), interesting_params().len());
    }

    #[test]
    fn test_should_produce_byte_identical_json() {
        let params = EndpointParams::builder()
            .region("us-west-2")
            .bucket("arn:aws:s3:us-west-2:123456789012:accesspoint:myap")
            .build();
        let first = serde_json::to_string(&resolve_endpoint(&params).unwrap()).unwrap();
        let second = serde_json::to_string(&resolve_endpoint(&params).unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
