use lambda_http::lambda_runtime::Context;

pub const LOCAL_REQUEST_ID: &str = "local";
pub const UNKNOWN_REQUEST_ID: &str = "unknown";

/// Host metadata for a single invocation.
pub trait InvocationContext {
    fn request_id(&self) -> Option<&str>;
}

impl InvocationContext for Context {
    fn request_id(&self) -> Option<&str> {
        // The runtime leaves this empty when the invoke headers lack an id.
        if self.request_id.is_empty() {
            None
        } else {
            Some(&self.request_id)
        }
    }
}

/// Request id reported in the response body: `"local"` without a context,
/// `"unknown"` when the context has no id.
pub fn resolve_request_id<C: InvocationContext + ?Sized>(context: Option<&C>) -> String {
    match context {
        None => LOCAL_REQUEST_ID.to_string(),
        Some(ctx) => ctx
            .request_id()
            .unwrap_or(UNKNOWN_REQUEST_ID)
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Option<&'static str>);

    impl InvocationContext for Fixed {
        fn request_id(&self) -> Option<&str> {
            self.0
        }
    }

    #[test]
    fn test_no_context_is_local() {
        assert_eq!(resolve_request_id::<Fixed>(None), "local");
    }

    #[test]
    fn test_context_with_id() {
        assert_eq!(resolve_request_id(Some(&Fixed(Some("req-1")))), "req-1");
    }

    #[test]
    fn test_context_without_id_is_unknown() {
        assert_eq!(resolve_request_id(Some(&Fixed(None))), "unknown");
    }

    #[test]
    fn test_lambda_context() {
        let mut ctx = Context::default();
        assert_eq!(resolve_request_id(Some(&ctx)), "unknown");

        ctx.request_id = "8476a536-e9f4-11e8-9739-2dfe598c3fcd".to_string();
        assert_eq!(
            resolve_request_id(Some(&ctx)),
            "8476a536-e9f4-11e8-9739-2dfe598c3fcd"
        );
    }
}
