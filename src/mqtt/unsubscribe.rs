/*
 * Copyright Bret Ambrose. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::decode::utils::*;
use crate::encode::utils::*;
use crate::error::{MqttError, MqttResult};
use crate::logging::*;
use crate::mqtt::*;
use crate::mqtt::utils::*;

use log::*;
use std::fmt;

/// Data model of an [MQTT 3.1.1 UNSUBSCRIBE](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718072) packet.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UnsubscribePacket {

    /// Packet identifier correlating this unsubscribe with its Unsuback
    pub packet_id: u16,

    /// List of topic filters to remove from the session.  Must contain at least one entry.
    pub topic_filters: Vec<String>,
}

fn compute_unsubscribe_packet_length(packet: &UnsubscribePacket) -> MqttResult<u32> {
    let mut total_remaining_length : usize = 2;

    for topic_filter in &packet.topic_filters {
        total_remaining_length += 2 + topic_filter.len();
    }

    if total_remaining_length > MAXIMUM_VARIABLE_LENGTH_INTEGER {
        let message = "compute_unsubscribe_packet_length - remaining length exceeds the variable length integer maximum";
        error!("{}", message);
        return Err(MqttError::new_encode_overflow(message));
    }

    Ok(total_remaining_length as u32)
}

pub(crate) fn write_unsubscribe_packet(packet: &UnsubscribePacket, dest: &mut Vec<u8>) -> MqttResult<()> {
    if packet.topic_filters.is_empty() {
        let message = "write_unsubscribe_packet - topic filter list is empty";
        error!("{}", message);
        return Err(MqttError::new_encoding_failure(message));
    }

    let total_remaining_length = compute_unsubscribe_packet_length(packet)?;

    encode_u8(packet_type_to_first_byte(PacketType::Unsubscribe), dest);
    encode_vli(total_remaining_length, dest)?;

    encode_u16(packet.packet_id, dest);

    for topic_filter in &packet.topic_filters {
        encode_length_prefixed_string(topic_filter, dest)?;
    }

    Ok(())
}

pub(crate) fn decode_unsubscribe_packet(_: &FixedHeader, packet_body: &[u8]) -> MqttResult<Box<MqttPacket>> {
    let mut packet = UnsubscribePacket { ..Default::default() };

    let mut mutable_body = packet_body;
    mutable_body = decode_u16(mutable_body, &mut packet.packet_id)?;

    while !mutable_body.is_empty() {
        let mut topic_filter = String::new();
        mutable_body = decode_length_prefixed_string(mutable_body, &mut topic_filter)?;

        packet.topic_filters.push(topic_filter);
    }

    if packet.topic_filters.is_empty() {
        let message = "decode_unsubscribe_packet - topic filter list is empty";
        error!("{}", message);
        return Err(MqttError::new_decoding_failure(message));
    }

    Ok(Box::new(MqttPacket::Unsubscribe(packet)))
}

impl fmt::Display for UnsubscribePacket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "UnsubscribePacket {{")?;
        log_primitive_value!(self.packet_id, f, "packet_id");
        write!(f, " topic_filters: [")?;
        for (i, topic_filter) in self.topic_filters.iter().enumerate() {
            write!(f, " {}: \"{}\"", i, topic_filter)?;
        }
        write!(f, " ]")?;
        write!(f, " }}")
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::decode::testing::*;

    #[test]
    fn unsubscribe_round_trip_encode_decode_single() {
        let packet = UnsubscribePacket {
            packet_id : 876,
            topic_filters : vec![ "hello/world".to_string() ],
        };

        assert!(do_round_trip_encode_decode_test(&MqttPacket::Unsubscribe(packet)));
    }

    #[test]
    fn unsubscribe_round_trip_encode_decode_multiple() {
        let packet = UnsubscribePacket {
            packet_id : 876,
            topic_filters : vec![
                "sensors/+".to_string(),
                "alerts/#".to_string(),
                "devices/unit-7/status".to_string(),
            ],
        };

        assert!(do_round_trip_encode_decode_test(&MqttPacket::Unsubscribe(packet)));
    }

    #[test]
    fn unsubscribe_encode_failure_empty_topic_filter_list() {
        let packet = UnsubscribePacket {
            packet_id : 11,
            topic_filters : Vec::new(),
        };

        let mut dest = Vec::new();
        let encode_result = crate::encode::encode_packet(&MqttPacket::Unsubscribe(packet), &mut dest);
        assert!(matches!(encode_result, Err(MqttError::EncodingFailure(_))));
    }

    #[test]
    fn unsubscribe_decode_failure_partial_tuple() {
        let packet = UnsubscribePacket {
            packet_id : 42,
            topic_filters : vec![ "x/y".to_string() ],
        };

        let corrupt_filter_length = | bytes: &[u8] | -> Vec<u8> {
            let mut clone = bytes.to_vec();

            // topic filter length prefix now points past the end of the body
            clone[5] = 77;
            clone
        };

        do_mutated_decode_failure_test(&MqttPacket::Unsubscribe(packet), corrupt_filter_length);
    }

    #[test]
    fn unsubscribe_decode_failure_truncation() {
        let packet = UnsubscribePacket {
            packet_id : 42,
            topic_filters : vec![ "sensors/+".to_string(), "alerts/#".to_string() ],
        };

        do_truncated_decode_failure_test(&MqttPacket::Unsubscribe(packet));
    }
}
