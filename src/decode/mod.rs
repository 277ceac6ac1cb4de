/*
 * Copyright Bret Ambrose. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/*!
Module containing the inbound half of the codec: fixed header decoding and per-type packet body
decoding.  The transport layer is responsible for framing; every function here expects a buffer
that begins at a packet's first byte and contains at least one complete packet.
 */

pub(crate) mod utils;

use crate::decode::utils::*;
use crate::error::{MqttError, MqttResult};
use crate::logging::*;
use crate::mqtt::*;
use crate::mqtt::utils::*;

use crate::mqtt::connack::*;
use crate::mqtt::connect::*;
use crate::mqtt::disconnect::*;
use crate::mqtt::pingreq::*;
use crate::mqtt::pingresp::*;
use crate::mqtt::puback::*;
use crate::mqtt::pubcomp::*;
use crate::mqtt::publish::*;
use crate::mqtt::pubrec::*;
use crate::mqtt::pubrel::*;
use crate::mqtt::suback::*;
use crate::mqtt::subscribe::*;
use crate::mqtt::unsuback::*;
use crate::mqtt::unsubscribe::*;

use log::*;

/// Decodes the fixed header at the front of a packet buffer.
///
/// On success, returns the decoded header together with the offset at which the packet body
/// (variable header plus payload) begins and the body's length in bytes, as declared by the
/// remaining length field.  The buffer may extend past the packet; only the fixed header bytes
/// are examined.
pub fn decode_fixed_header(buffer: &[u8]) -> MqttResult<(FixedHeader, usize, usize)> {
    if buffer.is_empty() {
        let message = "decode_fixed_header - no bytes for the packet type byte";
        error!("{}", message);
        return Err(MqttError::new_truncated_buffer(message));
    }

    let first_byte = buffer[0];

    let packet_type = convert_u8_to_packet_type(first_byte >> 4)?;
    let qos = convert_u8_to_quality_of_service((first_byte >> 1) & QOS_MASK)?;

    let fixed_header = FixedHeader {
        packet_type,
        dup : (first_byte & PUBLISH_PACKET_FIXED_HEADER_DUPLICATE_FLAG) != 0,
        qos,
        retain : (first_byte & PUBLISH_PACKET_FIXED_HEADER_RETAIN_FLAG) != 0,
    };

    let (remaining_length, post_header_bytes) = decode_vli(&buffer[1..])?;
    let body_offset = buffer.len() - post_header_bytes.len();

    Ok((fixed_header, body_offset, remaining_length as usize))
}

/// Decodes a single packet from the front of a buffer.
///
/// The buffer must contain at least `1 + remaining-length-field-bytes + remaining-length`
/// bytes; any bytes past the declared remaining length are ignored.  All variable-length data
/// is copied out of the buffer into the returned packet, which owns it exclusively.
pub fn decode_packet(buffer: &[u8]) -> MqttResult<Box<MqttPacket>> {
    let (fixed_header, body_offset, remaining_length) = decode_fixed_header(buffer)?;

    if buffer.len() < body_offset + remaining_length {
        let message = "decode_packet - buffer is shorter than the declared remaining length";
        error!("{}", message);
        return Err(MqttError::new_truncated_buffer(message));
    }

    let packet_body = &buffer[body_offset..(body_offset + remaining_length)];

    info!("decode_packet - decoding packet of type {}", fixed_header.packet_type);

    let decode_result = match fixed_header.packet_type {
        PacketType::Connect => { decode_connect_packet(&fixed_header, packet_body) }
        PacketType::Connack => { decode_connack_packet(&fixed_header, packet_body) }
        PacketType::Publish => { decode_publish_packet(&fixed_header, packet_body) }
        PacketType::Puback => { decode_puback_packet(&fixed_header, packet_body) }
        PacketType::Pubrec => { decode_pubrec_packet(&fixed_header, packet_body) }
        PacketType::Pubrel => { decode_pubrel_packet(&fixed_header, packet_body) }
        PacketType::Pubcomp => { decode_pubcomp_packet(&fixed_header, packet_body) }
        PacketType::Subscribe => { decode_subscribe_packet(&fixed_header, packet_body) }
        PacketType::Suback => { decode_suback_packet(&fixed_header, packet_body) }
        PacketType::Unsubscribe => { decode_unsubscribe_packet(&fixed_header, packet_body) }
        PacketType::Unsuback => { decode_unsuback_packet(&fixed_header, packet_body) }
        PacketType::Pingreq => { decode_pingreq_packet(&fixed_header, packet_body) }
        PacketType::Pingresp => { decode_pingresp_packet(&fixed_header, packet_body) }
        PacketType::Disconnect => { decode_disconnect_packet(&fixed_header, packet_body) }
    };

    if let Ok(packet) = &decode_result {
        log_packet("decode_packet - successfully decoded incoming packet: ", packet);
    }

    decode_result
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::encode::*;
    use assert_matches::assert_matches;

    pub(crate) fn encode_packet_for_test(packet: &MqttPacket) -> Vec<u8> {
        let mut encoded_buffer = Vec::with_capacity(1024);

        let encode_result = encode_packet(packet, &mut encoded_buffer);
        assert!(encode_result.is_ok());
        assert_eq!(encoded_buffer.len(), encode_result.unwrap());

        encoded_buffer
    }

    pub(crate) fn do_round_trip_encode_decode_test(packet: &MqttPacket) -> bool {
        let encoded_bytes = encode_packet_for_test(packet);

        let decode_result = decode_packet(encoded_bytes.as_slice());
        assert!(decode_result.is_ok());
        assert_eq!(*packet, *decode_result.unwrap());

        true
    }

    /*
     * verifies that the packet encodes/decodes correctly, but applying the supplied mutator
     * to the encoding leads to a decode failure.  Useful to verify wire format requirements
     * with respect to decode failures like reserved bits, bad lengths, etc...
     */
    pub(crate) fn do_mutated_decode_failure_test<F>(packet: &MqttPacket, mutator: F) where F : Fn(&[u8]) -> Vec<u8> {
        let good_encoded_bytes = encode_packet_for_test(packet);

        let good_decode_result = decode_packet(good_encoded_bytes.as_slice());
        assert!(good_decode_result.is_ok());
        assert_eq!(*packet, *good_decode_result.unwrap());

        let bad_encoded_bytes = mutator(good_encoded_bytes.as_slice());
        assert_ne!(good_encoded_bytes.as_slice(), bad_encoded_bytes.as_slice());

        assert!(decode_packet(bad_encoded_bytes.as_slice()).is_err());
    }

    /*
     * every strict prefix of an encoded packet is missing bytes somewhere: in the fixed
     * header, in the remaining length field, or in the body relative to the declared
     * remaining length.  All of them must surface as a truncation error.
     */
    pub(crate) fn do_truncated_decode_failure_test(packet: &MqttPacket) {
        let encoded_bytes = encode_packet_for_test(packet);

        for truncated_length in 0..encoded_bytes.len() {
            let decode_result = decode_packet(&encoded_bytes[..truncated_length]);
            assert_matches!(decode_result, Err(MqttError::TruncatedBuffer(_)));
        }
    }
}
