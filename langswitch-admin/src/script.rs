//! Quick-edit sync script
//!
//! Opening quick edit on a row copies the row's `data-hls` value into the
//! inline locale selector.

use langswitch_core::{Screen, events::InlineScript};

/// Script handle
pub const SCRIPT_HANDLE: &str = "hls-inline";

/// Script source
pub const QUICK_EDIT_SYNC_JS: &str = "(function($){\
function setLocaleInQE(tr){\
var span=$(tr).find('.column-hls_locale .hls-locale-data');\
var val=span.data('hls');\
if(val!==undefined){$('.inline-edit-row select.hls-locale-select').val(val);}\
}\
$(document).on('click','.editinline',function(){\
var tr=$(this).closest('tr');\
setTimeout(function(){setLocaleInQE(tr);},50);\
});\
})(jQuery);";

/// The sync script, on list screens only.
pub fn quick_edit_script(screen: Option<&Screen>, supported: impl Fn(&str) -> bool) -> Option<InlineScript> {
    let screen = screen?;
    if !screen.is_list() || !supported(screen.entry_type.as_deref()?) {
        return None;
    }
    Some(InlineScript {
        handle: SCRIPT_HANDLE.to_string(),
        deps: vec!["jquery".to_string()],
        in_footer: true,
        source: QUICK_EDIT_SYNC_JS.to_string(),
    })
}
