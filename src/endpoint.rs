//! Completion URL construction

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::BinderConfig;
use crate::models::TodoId;

/// Characters escaped in a query value when `escape_identifier` is on
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`');

/// `<endpoint>?<id_param>=<id>`. The id goes in raw unless the config asks
/// for escaping.
pub fn completion_url(config: &BinderConfig, id: &TodoId) -> String {
    let mut url = format!("{}?{}=", config.endpoint, config.id_param);
    if config.escape_identifier {
        url.extend(utf8_percent_encode(id.as_str(), QUERY_VALUE));
    } else {
        url.push_str(id.as_str());
    }
    url
}
