//! Local validation of DNS records before submission.

use crate::types::DnsRecord;

/// Name of the first field that keeps `record` from being submitted, if any.
///
/// `host`, `type` and `data` are always required. MX additionally needs
/// `priority`; SRV needs `priority`, `weight` and `port`. No other type has
/// extra requirements. Type names are matched exactly, so `"mx"` carries no
/// extra rule.
pub fn missing_required_field(record: &DnsRecord) -> Option<&'static str> {
    let base = [
        ("host", &record.host),
        ("type", &record.record_type),
        ("data", &record.data),
    ];
    if let Some((field, _)) = base.iter().find(|(_, value)| value.is_empty()) {
        return Some(*field);
    }

    let conditional = if record.record_type == "MX" {
        vec![("priority", &record.priority)]
    } else if record.record_type == "SRV" {
        vec![
            ("priority", &record.priority),
            ("weight", &record.weight),
            ("port", &record.port),
        ]
    } else {
        Vec::new()
    };

    conditional
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
}

/// Whether `record` is eligible for creation.
pub fn is_valid_dns_record(record: &DnsRecord) -> bool {
    missing_required_field(record).is_none()
}
