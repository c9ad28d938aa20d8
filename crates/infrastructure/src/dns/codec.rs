//! Minimal DNS wire codec.
//!
//! Handles exactly the single-question UDP case: decoding a query's question
//! section and synthesizing error responses that preserve the transaction ID.
//! Compression pointers are rejected, never followed. Both functions operate
//! on attacker-reachable input, so every read is bounds-checked against the
//! caller's slice and every write against the 512-byte UDP ceiling.

use vigil_dns_domain::{DecodeError, Question, ResponseCode, QCLASS_IN};

/// Fixed DNS header size.
pub const DNS_HEADER_LEN: usize = 12;

/// UDP DNS message size ceiling (no EDNS0).
pub const MAX_PACKET_SIZE: usize = 512;

/// Longest reconstructed question name accepted.
const MAX_NAME_LEN: usize = 255;

/// Decode the question section of a raw query.
///
/// Pure function of the input bytes: walks length-prefixed labels from
/// offset 12, joins them with `.` (case preserved), then reads the
/// big-endian type and class. The type is returned as-is; only the class is
/// policed here (IN or nothing). Never reads past `buf.len()`.
pub fn parse_question(buf: &[u8]) -> Result<Question, DecodeError> {
    // Header + at least one label byte + terminator + type/class.
    if buf.len() < DNS_HEADER_LEN + 5 {
        return Err(DecodeError::TooShort(buf.len()));
    }

    let mut pos = DNS_HEADER_LEN;
    let mut name_bytes: Vec<u8> = Vec::new();

    loop {
        if pos >= buf.len() {
            return Err(DecodeError::TruncatedName);
        }
        let label_len = buf[pos] as usize;
        pos += 1;

        if label_len == 0 {
            break;
        }
        if label_len & 0xC0 != 0 {
            return Err(DecodeError::CompressionPointer);
        }
        if pos + label_len > buf.len() {
            return Err(DecodeError::TruncatedName);
        }

        let separator = usize::from(!name_bytes.is_empty());
        if name_bytes.len() + separator + label_len > MAX_NAME_LEN {
            return Err(DecodeError::NameTooLong);
        }
        if separator == 1 {
            name_bytes.push(b'.');
        }
        name_bytes.extend_from_slice(&buf[pos..pos + label_len]);
        pos += label_len;
    }

    if name_bytes.is_empty() {
        return Err(DecodeError::EmptyName);
    }

    if pos + 4 > buf.len() {
        return Err(DecodeError::TruncatedQuestion);
    }
    let qtype = u16::from_be_bytes([buf[pos], buf[pos + 1]]);
    let qclass = u16::from_be_bytes([buf[pos + 2], buf[pos + 3]]);

    if qclass != QCLASS_IN {
        return Err(DecodeError::UnsupportedClass(qclass));
    }

    let name = String::from_utf8(name_bytes).map_err(|_| DecodeError::InvalidName)?;

    Ok(Question {
        name,
        qtype,
        qclass,
    })
}

/// Build an error response that mirrors the request's header and question.
///
/// Copies the 12-byte header, sets the QR bit, forces the low four flag bits
/// to `rcode` while preserving the opcode and RD bit, echoes the question
/// section, and zeroes all record counts. QDCOUNT is re-derived: 1 when a
/// question was present, 0 otherwise. The question extent comes from walking
/// the labels, never from trusting lengths on the wire.
pub fn build_error_response(
    request: &[u8],
    rcode: ResponseCode,
) -> Result<Vec<u8>, DecodeError> {
    if request.len() < DNS_HEADER_LEN {
        return Err(DecodeError::TooShort(request.len()));
    }

    let question_end = question_section_end(request)?;
    let question_len = question_end - DNS_HEADER_LEN;

    if DNS_HEADER_LEN + question_len > MAX_PACKET_SIZE {
        return Err(DecodeError::Overflow);
    }

    let mut response = Vec::with_capacity(DNS_HEADER_LEN + question_len);
    response.extend_from_slice(&request[..DNS_HEADER_LEN]);

    // QR = 1, keep OPCODE and RD, set RCODE.
    response[2] |= 0x80;
    response[3] = (response[3] & 0xF0) | (rcode.code() & 0x0F);

    let qdcount: u16 = if question_len > 0 { 1 } else { 0 };
    response[4..6].copy_from_slice(&qdcount.to_be_bytes());

    // ANCOUNT, NSCOUNT, ARCOUNT = 0.
    response[6..DNS_HEADER_LEN].fill(0);

    response.extend_from_slice(&request[DNS_HEADER_LEN..question_end]);

    Ok(response)
}

/// Walk QDCOUNT question entries and return the offset one past the last.
///
/// Fails when a question cannot be bounded inside the request buffer.
fn question_section_end(request: &[u8]) -> Result<usize, DecodeError> {
    let qdcount = u16::from_be_bytes([request[4], request[5]]) as usize;
    let mut pos = DNS_HEADER_LEN;

    for _ in 0..qdcount {
        loop {
            if pos >= request.len() {
                return Err(DecodeError::TruncatedQuestion);
            }
            let label_len = request[pos] as usize;
            pos += 1;
            if label_len == 0 {
                break;
            }
            pos += label_len;
            if pos >= request.len() {
                return Err(DecodeError::TruncatedQuestion);
            }
        }
        pos += 4; // type + class
        if pos > request.len() {
            return Err(DecodeError::TruncatedQuestion);
        }
    }

    Ok(pos)
}
