// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Conversion between records and management property sets.
//!
//! Record data travels as a single text property in zone-file presentation
//! order: whitespace-separated fields, with free-text fields in double quotes.
//! Durations are whole seconds and SIG timestamps use `YYYYMMDDHHMMSS`.
//!
//! | Type | Presentation |
//! |------|--------------|
//! | A | `192.0.2.1` |
//! | MX | `10 mail.example.com` |
//! | SOA | `ns1.example.com hostmaster.example.com 2025010101 900 600 86400 3600` |
//! | SRV | `0 5 389 dc1.example.com` |
//! | TXT | `"v=spf1 -all"` |

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;
use std::net::Ipv6Addr;
use std::str::FromStr;
use std::time::Duration;

use super::{ManagedInstance, PropertySet};
use crate::address::parse_ipv4_addr;
use crate::constants::{
    PROP_CONTAINER_NAME, PROP_DOMAIN_NAME, PROP_OWNER_NAME, PROP_RECORD_CLASS, PROP_RECORD_DATA,
    PROP_SERVER_NAME, PROP_TTL, SIG_TIMESTAMP_FORMAT,
};
use crate::dns_errors::{DnsError, Result};
use crate::records::{
    AData, AaaaData, AfsdbData, AtmaData, AtmaFormat, CnameData, HinfoData, IsdnData, KeyData,
    MbData, MdData, MfData, MgData, MinfoData, MrData, MxData, NsData, NxtData, ProviderToken,
    PtrData, Record, RecordClass, RecordData, RecordType, RpData, RtData, SigData, SoaData,
    SrvData, TxtData, WinsData, WinsrData, WksData, WksProtocol, X25Data,
};
use crate::zone::ZoneLink;

/// Render record data in presentation format.
#[must_use]
pub fn format_record_data(data: &RecordData) -> String {
    match data {
        RecordData::A(d) => d.address().to_string(),
        RecordData::AAAA(d) => d.address().to_string(),
        RecordData::AFSDB(d) => format!("{} {}", d.subtype(), d.server()),
        RecordData::ATMA(d) => format!("{} {}", d.format(), d.address()),
        RecordData::CNAME(d) => d.primary_name().to_string(),
        RecordData::HINFO(d) => format!("{} {}", quote(d.cpu()), quote(d.os())),
        RecordData::ISDN(d) => {
            if d.sub_address().is_empty() {
                quote(d.isdn_number())
            } else {
                format!("{} {}", quote(d.isdn_number()), quote(d.sub_address()))
            }
        }
        RecordData::KEY(d) => format!(
            "{} {} {} {}",
            d.flags(),
            d.protocol(),
            d.algorithm(),
            d.public_key_base64()
        ),
        RecordData::MB(d) => d.host().to_string(),
        RecordData::MD(d) => d.host().to_string(),
        RecordData::MF(d) => d.host().to_string(),
        RecordData::MG(d) => d.mailbox().to_string(),
        RecordData::MINFO(d) => format!("{} {}", d.responsible_mailbox(), d.error_mailbox()),
        RecordData::MR(d) => d.mailbox().to_string(),
        RecordData::MX(d) => format!("{} {}", d.preference(), d.exchange()),
        RecordData::NS(d) => d.name_server().to_string(),
        RecordData::NXT(d) => std::iter::once(d.next_domain())
            .chain(d.types().iter().map(|t| t.as_str()))
            .collect::<Vec<_>>()
            .join(" "),
        RecordData::PTR(d) => d.domain_name().to_string(),
        RecordData::RP(d) => format!("{} {}", d.mailbox(), d.txt_domain()),
        RecordData::RT(d) => format!("{} {}", d.preference(), d.intermediate_host()),
        RecordData::SIG(d) => format!(
            "{} {} {} {} {} {} {} {} {}",
            d.type_covered(),
            d.algorithm(),
            d.labels(),
            d.original_ttl().as_secs(),
            d.expiration().format(SIG_TIMESTAMP_FORMAT),
            d.inception().format(SIG_TIMESTAMP_FORMAT),
            d.key_tag(),
            d.signer(),
            d.signature_base64()
        ),
        RecordData::SOA(d) => format!(
            "{} {} {} {} {} {} {}",
            d.primary_server(),
            d.responsible_party(),
            d.serial(),
            d.refresh().as_secs(),
            d.retry().as_secs(),
            d.expire().as_secs(),
            d.minimum_ttl().as_secs()
        ),
        RecordData::SRV(d) => format!("{} {} {} {}", d.priority(), d.weight(), d.port(), d.target()),
        RecordData::TXT(d) => quote(d.text()),
        RecordData::WINS(d) => {
            let servers: Vec<String> = d.servers().iter().map(ToString::to_string).collect();
            format!(
                "{} {} {} {}",
                d.mapping_flag(),
                d.lookup_timeout().as_secs(),
                d.cache_timeout().as_secs(),
                servers.join(" ")
            )
        }
        RecordData::WINSR(d) => format!(
            "{} {} {} {}",
            d.mapping_flag(),
            d.lookup_timeout().as_secs(),
            d.cache_timeout().as_secs(),
            d.result_domain()
        ),
        RecordData::WKS(d) => std::iter::once(d.address().to_string())
            .chain(std::iter::once(d.protocol().to_string()))
            .chain(d.services().iter().cloned())
            .collect::<Vec<_>>()
            .join(" "),
        RecordData::X25(d) => quote(d.psdn_address()),
    }
}

/// Parse presentation-format record data for one record type.
///
/// # Errors
///
/// Returns [`DnsError::InvalidArgument`] if fields are missing, extra fields
/// follow the last one, or a field value is malformed.
pub fn parse_record_data(record_type: RecordType, text: &str) -> Result<RecordData> {
    let mut fields = Fields::new(record_type, text)?;

    let data: RecordData = match record_type {
        RecordType::A => AData::new(parse_ipv4_addr(&fields.next("address")?)?).into(),
        RecordType::AAAA => AaaaData::new(fields.parse::<Ipv6Addr>("address")?).into(),
        RecordType::AFSDB => {
            AfsdbData::new(fields.parse("subtype")?, fields.next("server")?)?.into()
        }
        RecordType::ATMA => {
            let format = parse_atma_format(&fields.next("format")?)?;
            AtmaData::new(format, fields.next("address")?)?.into()
        }
        RecordType::CNAME => CnameData::new(fields.next("primary_name")?)?.into(),
        RecordType::HINFO => HinfoData::new(fields.next("cpu")?, fields.next("os")?)?.into(),
        RecordType::ISDN => {
            let number = fields.next("isdn_number")?;
            let sub_address = fields.optional().unwrap_or_default();
            IsdnData::new(number, sub_address)?.into()
        }
        RecordType::KEY => KeyData::new(
            fields.parse("flags")?,
            fields.parse("protocol")?,
            fields.parse("algorithm")?,
            decode_base64("public_key", &fields.rest().concat())?,
        )
        .into(),
        RecordType::MB => MbData::new(fields.next("host")?)?.into(),
        RecordType::MD => MdData::new(fields.next("host")?)?.into(),
        RecordType::MF => MfData::new(fields.next("host")?)?.into(),
        RecordType::MG => MgData::new(fields.next("mailbox")?)?.into(),
        RecordType::MINFO => MinfoData::new(
            fields.next("responsible_mailbox")?,
            fields.next("error_mailbox")?,
        )?
        .into(),
        RecordType::MR => MrData::new(fields.next("mailbox")?)?.into(),
        RecordType::MX => MxData::new(fields.parse("preference")?, fields.next("exchange")?)?.into(),
        RecordType::NS => NsData::new(fields.next("name_server")?)?.into(),
        RecordType::NXT => {
            let next_domain = fields.next("next_domain")?;
            let types = fields
                .rest()
                .iter()
                .map(|t| t.parse::<RecordType>())
                .collect::<Result<Vec<_>>>()?;
            NxtData::new(next_domain, types)?.into()
        }
        RecordType::PTR => PtrData::new(fields.next("domain_name")?)?.into(),
        RecordType::RP => RpData::new(fields.next("mailbox")?, fields.next("txt_domain")?)?.into(),
        RecordType::RT => RtData::new(
            fields.parse("preference")?,
            fields.next("intermediate_host")?,
        )?
        .into(),
        RecordType::SIG => SigData::new(
            fields.parse("type_covered")?,
            fields.parse("algorithm")?,
            fields.parse("labels")?,
            fields.seconds("original_ttl")?,
            fields.timestamp("expiration")?,
            fields.timestamp("inception")?,
            fields.parse("key_tag")?,
            fields.next("signer")?,
            decode_base64("signature", &fields.rest().concat())?,
        )?
        .into(),
        RecordType::SOA => {
            let primary_server = fields.next("primary_server")?;
            let responsible_party = fields.next("responsible_party")?;
            SoaData::new(
                fields.parse("serial")?,
                primary_server,
                responsible_party,
                fields.seconds("refresh")?,
                fields.seconds("retry")?,
                fields.seconds("expire")?,
                fields.seconds("minimum_ttl")?,
            )?
            .into()
        }
        RecordType::SRV => SrvData::new(
            fields.parse("priority")?,
            fields.parse("weight")?,
            fields.parse("port")?,
            fields.next("target")?,
        )?
        .into(),
        RecordType::TXT => {
            let first = fields.next("text")?;
            let text = std::iter::once(first)
                .chain(fields.rest())
                .collect::<Vec<_>>()
                .join(" ");
            TxtData::new(text)?.into()
        }
        RecordType::WINS => {
            let mapping_flag = fields.parse("mapping_flag")?;
            let lookup_timeout = fields.seconds("lookup_timeout")?;
            let cache_timeout = fields.seconds("cache_timeout")?;
            let servers = fields
                .rest()
                .iter()
                .map(|s| parse_ipv4_addr(s))
                .collect::<Result<Vec<_>>>()?;
            WinsData::new(mapping_flag, lookup_timeout, cache_timeout, servers)?.into()
        }
        RecordType::WINSR => WinsrData::new(
            fields.parse("mapping_flag")?,
            fields.seconds("lookup_timeout")?,
            fields.seconds("cache_timeout")?,
            fields.next("result_domain")?,
        )?
        .into(),
        RecordType::WKS => {
            let address = parse_ipv4_addr(&fields.next("address")?)?;
            let protocol = fields.parse::<WksProtocol>("protocol")?;
            WksData::new(address, protocol, fields.rest())?.into()
        }
        RecordType::X25 => X25Data::new(fields.next("psdn_address")?)?.into(),
    };

    fields.finish()?;
    Ok(data)
}

/// Properties describing `record` as an instance in `zone_name` on `server_name`.
///
/// # Errors
///
/// Returns [`DnsError::InvalidArgument`] if the TTL is not a whole number of
/// seconds, since instances store it in seconds.
pub fn record_to_properties(
    record: &Record,
    zone_name: &str,
    server_name: &str,
) -> Result<PropertySet> {
    let ttl = record.ttl();
    if ttl.subsec_nanos() != 0 {
        return Err(DnsError::invalid_argument(
            "ttl",
            format!(
                "{} record '{}' needs a whole number of seconds, got {ttl:?}",
                record.record_type(),
                record.name()
            ),
        ));
    }

    let mut properties = PropertySet::new();
    properties.insert(PROP_SERVER_NAME.to_string(), Value::from(server_name));
    properties.insert(PROP_CONTAINER_NAME.to_string(), Value::from(zone_name));
    properties.insert(PROP_DOMAIN_NAME.to_string(), Value::from(zone_name));
    properties.insert(PROP_OWNER_NAME.to_string(), Value::from(record.name()));
    properties.insert(PROP_TTL.to_string(), Value::from(ttl.as_secs()));
    properties.insert(
        PROP_RECORD_CLASS.to_string(),
        Value::from(record.class().code()),
    );
    properties.insert(
        PROP_RECORD_DATA.to_string(),
        Value::from(format_record_data(record.data())),
    );
    Ok(properties)
}

/// Build a record of `record_type` from a management instance.
///
/// The instance path becomes the record's provider token. A missing class
/// property means `IN`.
///
/// # Errors
///
/// Returns [`DnsError::InvalidArgument`] if a required property is missing or
/// any value is malformed.
pub fn record_from_instance(
    instance: &ManagedInstance,
    record_type: RecordType,
    zone: Option<ZoneLink>,
) -> Result<Record> {
    let owner = instance
        .string(PROP_OWNER_NAME)
        .ok_or_else(|| missing_property(instance, PROP_OWNER_NAME))?;
    let ttl = instance
        .unsigned(PROP_TTL)
        .ok_or_else(|| missing_property(instance, PROP_TTL))?;
    let class = match instance.properties.get(PROP_RECORD_CLASS) {
        None => RecordClass::IN,
        Some(value) => value
            .as_u64()
            .and_then(|code| u16::try_from(code).ok())
            .and_then(RecordClass::from_code)
            .ok_or_else(|| {
                DnsError::invalid_argument(
                    PROP_RECORD_CLASS,
                    format!("instance '{}' has unknown class {value}", instance.path),
                )
            })?,
    };
    let text = instance
        .string(PROP_RECORD_DATA)
        .ok_or_else(|| missing_property(instance, PROP_RECORD_DATA))?;

    Record::from_provider(
        zone,
        Some(ProviderToken::new(instance.path.clone())),
        owner,
        class,
        Duration::from_secs(ttl),
        parse_record_data(record_type, text)?,
    )
}

fn missing_property(instance: &ManagedInstance, property: &str) -> DnsError {
    DnsError::invalid_argument(
        property,
        format!("instance '{}' has no {property} property", instance.path),
    )
}

fn parse_atma_format(token: &str) -> Result<AtmaFormat> {
    if token.eq_ignore_ascii_case("AESA") {
        return Ok(AtmaFormat::Aesa);
    }
    if token.eq_ignore_ascii_case("E164") {
        return Ok(AtmaFormat::E164);
    }
    token
        .parse::<u8>()
        .ok()
        .and_then(AtmaFormat::from_code)
        .ok_or_else(|| {
            DnsError::invalid_argument("format", format!("'{token}' is not an ATMA format"))
        })
}

fn decode_base64(param: &str, text: &str) -> Result<Vec<u8>> {
    BASE64
        .decode(text)
        .map_err(|e| DnsError::invalid_argument(param, format!("invalid base64: {e}")))
}

/// Wrap free text in double quotes, escaping quotes and backslashes.
fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Split presentation text into fields, honoring double quotes.
fn tokenize(text: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        let mut token = String::new();
        if c == '"' {
            chars.next();
            let mut closed = false;
            while let Some(c) = chars.next() {
                match c {
                    '\\' => {
                        if let Some(escaped) = chars.next() {
                            token.push(escaped);
                        }
                    }
                    '"' => {
                        closed = true;
                        break;
                    }
                    _ => token.push(c),
                }
            }
            if !closed {
                return Err(DnsError::invalid_argument(
                    "record_data",
                    format!("unterminated quoted string in '{text}'"),
                ));
            }
        } else {
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() {
                    break;
                }
                token.push(c);
                chars.next();
            }
        }
        tokens.push(token);
    }

    Ok(tokens)
}

/// Cursor over the fields of one presentation string.
struct Fields<'a> {
    record_type: RecordType,
    text: &'a str,
    tokens: std::vec::IntoIter<String>,
}

impl<'a> Fields<'a> {
    fn new(record_type: RecordType, text: &'a str) -> Result<Self> {
        Ok(Self {
            record_type,
            text,
            tokens: tokenize(text)?.into_iter(),
        })
    }

    fn next(&mut self, field: &str) -> Result<String> {
        self.tokens.next().ok_or_else(|| {
            DnsError::invalid_argument(
                "record_data",
                format!(
                    "{} record data '{}' is missing the {field} field",
                    self.record_type, self.text
                ),
            )
        })
    }

    fn optional(&mut self) -> Option<String> {
        self.tokens.next()
    }

    fn parse<T: FromStr>(&mut self, field: &str) -> Result<T> {
        let token = self.next(field)?;
        token.parse().map_err(|_| {
            DnsError::invalid_argument(
                field,
                format!("'{token}' is not a valid {field} for {}", self.record_type),
            )
        })
    }

    fn seconds(&mut self, field: &str) -> Result<Duration> {
        self.parse::<u64>(field).map(Duration::from_secs)
    }

    fn timestamp(&mut self, field: &str) -> Result<DateTime<Utc>> {
        let token = self.next(field)?;
        NaiveDateTime::parse_from_str(&token, SIG_TIMESTAMP_FORMAT)
            .map(|t| t.and_utc())
            .map_err(|e| {
                DnsError::invalid_argument(field, format!("'{token}' is not a timestamp: {e}"))
            })
    }

    fn rest(&mut self) -> Vec<String> {
        self.tokens.by_ref().collect()
    }

    fn finish(mut self) -> Result<()> {
        let extra = self.rest();
        if extra.is_empty() {
            return Ok(());
        }
        Err(DnsError::invalid_argument(
            "record_data",
            format!(
                "{} record data '{}' has unexpected trailing fields: {}",
                self.record_type,
                self.text,
                extra.join(" ")
            ),
        ))
    }
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod codec_tests;
