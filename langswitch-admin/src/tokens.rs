//! Token scopes and the per-pathway checks

use langswitch_core::RequestContext;
use langswitch_nonce::{NonceGuard, NonceScope};
use tracing::debug;

/// Edit-screen form
pub const SAVE_META: NonceScope = NonceScope::new("hls_save_meta", "hls_nonce");

/// Quick-edit form
pub const INLINE_SAVE: NonceScope = NonceScope::new("hls_inline_save", "hls_inline_nonce");

/// Bulk-edit form
pub const BULK_SAVE: NonceScope = NonceScope::new("hls_bulk_save", "hls_bulk_nonce");

/// Host field marking a bulk-edit submission
pub const BULK_MARKER: &str = "bulk_edit";

fn check(guard: &NonceGuard, request: &RequestContext, scope: NonceScope) -> bool {
    let submitted = request.form.get(scope.field);
    match guard.verify_submitted(submitted, scope, request.principal.id()) {
        Ok(_) => true,
        Err(err) => {
            if submitted.is_some() {
                debug!(action = scope.action, error = %err, "Rejected form token");
            }
            false
        }
    }
}

/// Edit-screen or quick-edit token is valid.
pub fn verify_single_or_inline(guard: &NonceGuard, request: &RequestContext) -> bool {
    check(guard, request, SAVE_META) || check(guard, request, INLINE_SAVE)
}

/// Bulk-edit token is valid.
pub fn verify_bulk(guard: &NonceGuard, request: &RequestContext) -> bool {
    check(guard, request, BULK_SAVE)
}

/// The submission came from the bulk-edit form.
pub fn is_bulk_request(request: &RequestContext) -> bool {
    request.form.contains(BULK_MARKER) || request.form.contains(BULK_SAVE.field)
}
