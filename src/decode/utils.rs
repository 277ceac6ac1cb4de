/*
 * Copyright Bret Ambrose. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

///
/// Internal utilities to read wire-format primitives out of packet body slices.  Every reader
/// validates the requested byte count against the slice before touching it and returns the
/// unread remainder on success.

use crate::error::{MqttError, MqttResult};

use log::*;

/// Decodes a variable length integer from the front of a buffer, returning the value and the
/// unread remainder of the buffer.
pub(crate) fn decode_vli(buffer: &[u8]) -> MqttResult<(u32, &[u8])> {
    let mut value: u32 = 0;
    let mut shift: u32 = 0;
    let data_len = buffer.len();

    for i in 0..4 {
        if i >= data_len {
            let message = "decode_vli - buffer ends in the middle of a variable length integer";
            error!("{}", message);
            return Err(MqttError::new_truncated_buffer(message));
        }

        let byte = buffer[i];
        value |= ((byte & 0x7F) as u32) << shift;
        shift += 7;

        if (byte & 0x80) == 0 {
            return Ok((value, &buffer[(i + 1)..]));
        }
    }

    error!("decode_vli - continuation bit still set on the fourth encoded byte");
    Err(MqttError::new_malformed_varint())
}

pub(crate) fn decode_u8<'a>(bytes: &'a[u8], value: &mut u8) -> MqttResult<&'a[u8]> {
    if bytes.is_empty() {
        let message = "decode_u8 - insufficient packet bytes for u8 field";
        error!("{}", message);
        return Err(MqttError::new_truncated_buffer(message));
    }

    *value = bytes[0];

    Ok(&bytes[1..])
}

pub(crate) fn decode_u16<'a>(bytes: &'a[u8], value: &mut u16) -> MqttResult<&'a[u8]> {
    if bytes.len() < 2 {
        let message = "decode_u16 - insufficient packet bytes for u16 field";
        error!("{}", message);
        return Err(MqttError::new_truncated_buffer(message));
    }

    *value = u16::from_be_bytes(bytes[..2].try_into().unwrap());

    Ok(&bytes[2..])
}

#[cfg(test)]
pub(crate) fn decode_u32<'a>(bytes: &'a[u8], value: &mut u32) -> MqttResult<&'a[u8]> {
    if bytes.len() < 4 {
        let message = "decode_u32 - insufficient packet bytes for u32 field";
        error!("{}", message);
        return Err(MqttError::new_truncated_buffer(message));
    }

    *value = u32::from_be_bytes(bytes[..4].try_into().unwrap());

    Ok(&bytes[4..])
}

fn map_utf8_error_to_decoding_failure(error: std::str::Utf8Error) -> MqttError {
    error!("decode_length_prefixed_string - invalid utf-8");
    MqttError::from(error)
}

pub(crate) fn decode_length_prefixed_string<'a>(bytes: &'a[u8], value: &mut String) -> MqttResult<&'a[u8]> {
    if bytes.len() < 2 {
        let message = "decode_length_prefixed_string - string value does not have a full length prefix";
        error!("{}", message);
        return Err(MqttError::new_truncated_buffer(message));
    }

    let value_length : usize = u16::from_be_bytes(bytes[..2].try_into().unwrap()) as usize;
    let mutable_bytes = &bytes[2..];
    if value_length > mutable_bytes.len() {
        let message = "decode_length_prefixed_string - string value has length larger than remaining packet bytes";
        error!("{}", message);
        return Err(MqttError::new_truncated_buffer(message));
    }

    let decoded_string = std::str::from_utf8(&mutable_bytes[..value_length]).map_err(map_utf8_error_to_decoding_failure)?;
    *value = decoded_string.to_string();
    Ok(&mutable_bytes[(value_length)..])
}

pub(crate) fn decode_optional_length_prefixed_string<'a>(bytes: &'a[u8], value: &mut Option<String>) -> MqttResult<&'a[u8]> {
    let mut decoded_value = String::new();
    let remaining_bytes = decode_length_prefixed_string(bytes, &mut decoded_value)?;

    *value = Some(decoded_value);
    Ok(remaining_bytes)
}

pub(crate) fn decode_length_prefixed_bytes<'a>(bytes: &'a[u8], value: &mut Vec<u8>) -> MqttResult<&'a[u8]> {
    if bytes.len() < 2 {
        let message = "decode_length_prefixed_bytes - binary data value does not have a full length prefix";
        error!("{}", message);
        return Err(MqttError::new_truncated_buffer(message));
    }

    let value_length : usize = u16::from_be_bytes(bytes[..2].try_into().unwrap()) as usize;
    let mutable_bytes = &bytes[2..];
    if value_length > mutable_bytes.len() {
        let message = "decode_length_prefixed_bytes - binary data value has length larger than remaining packet bytes";
        error!("{}", message);
        return Err(MqttError::new_truncated_buffer(message));
    }

    *value = Vec::from(&mutable_bytes[..value_length]);
    Ok(&mutable_bytes[(value_length)..])
}

pub(crate) fn decode_optional_length_prefixed_bytes<'a>(bytes: &'a[u8], value: &mut Option<Vec<u8>>) -> MqttResult<&'a[u8]> {
    let mut decoded_value = Vec::new();
    let remaining_bytes = decode_length_prefixed_bytes(bytes, &mut decoded_value)?;

    *value = Some(decoded_value);
    Ok(remaining_bytes)
}

macro_rules! define_ack_packet_decode_function {
    ($function_name: ident, $mqtt_packet_type: ident, $packet_type: ident, $function_name_as_string: expr) => {
        pub(crate) fn $function_name(_: &FixedHeader, packet_body: &[u8]) -> MqttResult<Box<MqttPacket>> {
            if packet_body.len() != ACK_PACKET_REMAINING_LENGTH {
                let message = format!("{} - remaining length must be exactly {}", $function_name_as_string, ACK_PACKET_REMAINING_LENGTH);
                error!("{}", message);
                return Err(MqttError::new_remaining_length_mismatch(message));
            }

            let mut packet = $packet_type { ..Default::default() };

            decode_u16(packet_body, &mut packet.packet_id)?;

            Ok(Box::new(MqttPacket::$mqtt_packet_type(packet)))
        }
    };
}

pub(crate) use define_ack_packet_decode_function;

macro_rules! define_header_only_packet_decode_function {
    ($function_name: ident, $mqtt_packet_type: ident, $packet_type: ident, $function_name_as_string: expr) => {
        pub(crate) fn $function_name(_: &FixedHeader, packet_body: &[u8]) -> MqttResult<Box<MqttPacket>> {
            if !packet_body.is_empty() {
                let message = format!("{} - remaining length must be zero", $function_name_as_string);
                error!("{}", message);
                return Err(MqttError::new_remaining_length_mismatch(message));
            }

            Ok(Box::new(MqttPacket::$mqtt_packet_type($packet_type {})))
        }
    };
}

pub(crate) use define_header_only_packet_decode_function;
