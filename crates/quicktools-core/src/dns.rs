//! DNS lookup support: record modeling, domain validation, batch gating.
//!
//! The lookup page sends its queries over DNS-over-HTTPS and gets JSON
//! answers back; that transport lives in the page. This module owns what
//! the page needs around it: parsing the record type the user picked,
//! validating the domain list, enforcing the batch quota for the current
//! plan, and formatting answers as zone-file style lines.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Domains allowed per batch lookup on the free plan.
pub const FREE_BATCH_LIMIT: usize = 5;

/// Errors for the DNS lookup tool.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DnsError {
    /// The record type string was not recognized.
    #[error("Unknown record type: {0:?}")]
    UnknownRecordType(String),

    /// A domain failed hostname syntax validation.
    #[error("Invalid domain name: {0:?}")]
    InvalidDomain(String),

    /// The batch exceeds the plan's domain limit.
    #[error("Batch of {requested} domains exceeds the plan limit of {limit}")]
    QuotaExceeded { requested: usize, limit: usize },

    /// The domain list contained no domains.
    #[error("No domains to look up")]
    EmptyBatch,
}

/// DNS record types the lookup tool supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    #[default]
    A,
    Aaaa,
    Cname,
    Mx,
    Ns,
    Txt,
}

impl RecordType {
    /// All supported types, in the order the UI lists them.
    pub const ALL: [RecordType; 6] = [
        RecordType::A,
        RecordType::Aaaa,
        RecordType::Cname,
        RecordType::Mx,
        RecordType::Ns,
        RecordType::Txt,
    ];
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Cname => "CNAME",
            RecordType::Mx => "MX",
            RecordType::Ns => "NS",
            RecordType::Txt => "TXT",
        };
        f.write_str(name)
    }
}

impl FromStr for RecordType {
    type Err = DnsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::Aaaa),
            "CNAME" => Ok(RecordType::Cname),
            "MX" => Ok(RecordType::Mx),
            "NS" => Ok(RecordType::Ns),
            "TXT" => Ok(RecordType::Txt),
            _ => Err(DnsError::UnknownRecordType(s.to_string())),
        }
    }
}

/// One answer record, shaped like the DoH JSON `Answer` entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Owner name the record belongs to.
    pub name: String,
    /// Record type.
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Time to live, in seconds.
    pub ttl: u32,
    /// Record data as returned by the resolver.
    pub data: String,
}

/// Pricing plan for batch lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchPlan {
    /// Free tier, capped at [`FREE_BATCH_LIMIT`] domains per batch.
    #[default]
    Free,
    /// Paid tier, uncapped.
    Pro,
}

impl BatchPlan {
    /// Maximum domains per batch, or `None` for unlimited.
    pub fn batch_limit(self) -> Option<usize> {
        match self {
            BatchPlan::Free => Some(FREE_BATCH_LIMIT),
            BatchPlan::Pro => None,
        }
    }
}

/// Validate hostname syntax: dot-separated labels of letters, digits and
/// interior hyphens, 63 bytes per label, 253 total, at least two labels.
pub fn validate_domain(name: &str) -> Result<(), DnsError> {
    let invalid = || DnsError::InvalidDomain(name.to_string());

    let trimmed = name.trim().strip_suffix('.').unwrap_or_else(|| name.trim());
    if trimmed.is_empty() || trimmed.len() > 253 {
        return Err(invalid());
    }

    let labels: Vec<&str> = trimmed.split('.').collect();
    if labels.len() < 2 {
        return Err(invalid());
    }

    for label in labels {
        if label.is_empty() || label.len() > 63 {
            return Err(invalid());
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(invalid());
        }
        if !label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
            return Err(invalid());
        }
    }

    Ok(())
}

/// Parse a textarea of domains, one per line.
///
/// Lines are trimmed, blank lines skipped, duplicates dropped while keeping
/// first-seen order, and every domain validated.
pub fn parse_domain_list(text: &str) -> Result<Vec<String>, DnsError> {
    let mut domains: Vec<String> = Vec::new();

    for line in text.lines() {
        let domain = line.trim().to_ascii_lowercase();
        if domain.is_empty() {
            continue;
        }
        validate_domain(&domain)?;
        if !domains.contains(&domain) {
            domains.push(domain);
        }
    }

    if domains.is_empty() {
        return Err(DnsError::EmptyBatch);
    }

    Ok(domains)
}

/// Check a batch size against the plan's quota.
pub fn check_batch_quota(plan: BatchPlan, domain_count: usize) -> Result<(), DnsError> {
    if domain_count == 0 {
        return Err(DnsError::EmptyBatch);
    }
    if let Some(limit) = plan.batch_limit() {
        if domain_count > limit {
            return Err(DnsError::QuotaExceeded {
                requested: domain_count,
                limit,
            });
        }
    }
    Ok(())
}

/// Format a record as a zone-file style line.
pub fn format_record(record: &DnsRecord) -> String {
    let name = record.name.strip_suffix('.').unwrap_or(&record.name);
    format!(
        "{}.\t{}\tIN\t{}\t{}",
        name, record.ttl, record.record_type, record.data
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_type_parsing() {
        assert_eq!("A".parse::<RecordType>().unwrap(), RecordType::A);
        assert_eq!("aaaa".parse::<RecordType>().unwrap(), RecordType::Aaaa);
        assert_eq!(" mx ".parse::<RecordType>().unwrap(), RecordType::Mx);
        assert_eq!(
            "SPF".parse::<RecordType>().unwrap_err(),
            DnsError::UnknownRecordType("SPF".to_string())
        );
    }

    #[test]
    fn test_record_type_display_roundtrip() {
        for rt in RecordType::ALL {
            assert_eq!(rt.to_string().parse::<RecordType>().unwrap(), rt);
        }
    }

    #[test]
    fn test_valid_domains() {
        for domain in [
            "example.com",
            "sub.example.co.uk",
            "xn--bcher-kva.example",
            "a-b.example.com",
            "example.com.",
            "123.example.com",
        ] {
            assert!(validate_domain(domain).is_ok(), "{domain} should be valid");
        }
    }

    #[test]
    fn test_invalid_domains() {
        for domain in [
            "",
            "localhost",
            ".example.com",
            "example..com",
            "-bad.example.com",
            "bad-.example.com",
            "exa mple.com",
            "emoji🚀.example.com",
        ] {
            assert!(validate_domain(domain).is_err(), "{domain} should be invalid");
        }
    }

    #[test]
    fn test_overlong_label_rejected() {
        let long_label = "a".repeat(64);
        assert!(validate_domain(&format!("{long_label}.com")).is_err());

        let max_label = "a".repeat(63);
        assert!(validate_domain(&format!("{max_label}.com")).is_ok());
    }

    #[test]
    fn test_overlong_domain_rejected() {
        let label = "a".repeat(60);
        let long = format!("{label}.{label}.{label}.{label}.{label}.com");
        assert!(validate_domain(&long).is_err());
    }

    #[test]
    fn test_parse_domain_list() {
        let text = "example.com\n\n  Sub.Example.org  \nexample.com\n";
        assert_eq!(
            parse_domain_list(text).unwrap(),
            vec!["example.com".to_string(), "sub.example.org".to_string()]
        );
    }

    #[test]
    fn test_parse_domain_list_rejects_invalid_line() {
        assert_eq!(
            parse_domain_list("example.com\nnot a domain\n").unwrap_err(),
            DnsError::InvalidDomain("not a domain".to_string())
        );
    }

    #[test]
    fn test_parse_domain_list_empty() {
        assert_eq!(parse_domain_list("\n  \n").unwrap_err(), DnsError::EmptyBatch);
    }

    #[test]
    fn test_free_quota_enforced() {
        assert!(check_batch_quota(BatchPlan::Free, 1).is_ok());
        assert!(check_batch_quota(BatchPlan::Free, FREE_BATCH_LIMIT).is_ok());
        assert_eq!(
            check_batch_quota(BatchPlan::Free, FREE_BATCH_LIMIT + 1).unwrap_err(),
            DnsError::QuotaExceeded {
                requested: 6,
                limit: 5
            }
        );
    }

    #[test]
    fn test_pro_quota_uncapped() {
        assert!(check_batch_quota(BatchPlan::Pro, 10_000).is_ok());
    }

    #[test]
    fn test_zero_domains_rejected() {
        assert_eq!(
            check_batch_quota(BatchPlan::Pro, 0).unwrap_err(),
            DnsError::EmptyBatch
        );
    }

    #[test]
    fn test_format_record() {
        let record = DnsRecord {
            name: "example.com".to_string(),
            record_type: RecordType::A,
            ttl: 300,
            data: "93.184.216.34".to_string(),
        };
        assert_eq!(format_record(&record), "example.com.\t300\tIN\tA\t93.184.216.34");
    }

    #[test]
    fn test_format_record_normalizes_trailing_dot() {
        let record = DnsRecord {
            name: "example.com.".to_string(),
            record_type: RecordType::Mx,
            ttl: 3600,
            data: "10 mail.example.com.".to_string(),
        };
        assert_eq!(
            format_record(&record),
            "example.com.\t3600\tIN\tMX\t10 mail.example.com."
        );
    }

    #[test]
    fn test_record_serde_matches_doh_shape() {
        let json = r#"{"name":"example.com","type":"A","ttl":300,"data":"93.184.216.34"}"#;
        let record: DnsRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.record_type, RecordType::A);
        assert_eq!(record.ttl, 300);
    }
}
