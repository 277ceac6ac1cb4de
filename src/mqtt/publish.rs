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

/// Data model of an [MQTT 3.1.1 PUBLISH](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718037) packet.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PublishPacket {

    /// Packet identifier correlating this publish with its acknowledgement(s).  Present on the
    /// wire iff qos is not AtMostOnce; the caller must assign one before encoding at QoS 1 or 2.
    pub packet_id: Option<u16>,

    /// Topic this message is published to
    pub topic: String,

    /// Delivery quality of service for this message
    pub qos: QualityOfService,

    /// True if this packet is a retransmission of an earlier delivery attempt
    pub dup: bool,

    /// True if the broker should store this message as the last known value for its topic
    pub retain: bool,

    /// Message body, carried verbatim after the variable header with no length prefix of its
    /// own; its extent is implied by the remaining length
    pub payload: Vec<u8>,
}

impl PublishPacket {

    /// Builds a Publish packet from the application's message parameters.  The topic and
    /// payload are copied into buffers owned by the new packet.
    pub fn new(topic: &str, qos: QualityOfService, payload: &[u8]) -> PublishPacket {
        PublishPacket {
            topic : topic.to_string(),
            qos,
            payload : payload.to_vec(),
            ..Default::default()
        }
    }
}

fn compute_publish_packet_length(packet: &PublishPacket) -> MqttResult<u32> {
    let mut total_remaining_length : usize = 2 + packet.topic.len();

    /* packet id is only present at qos 1 and up */
    if packet.qos != QualityOfService::AtMostOnce {
        total_remaining_length += 2;
    }

    total_remaining_length += packet.payload.len();

    if total_remaining_length > MAXIMUM_VARIABLE_LENGTH_INTEGER {
        let message = "compute_publish_packet_length - remaining length exceeds the variable length integer maximum";
        error!("{}", message);
        return Err(MqttError::new_encode_overflow(message));
    }

    Ok(total_remaining_length as u32)
}

fn compute_publish_packet_first_byte(packet: &PublishPacket) -> u8 {
    let mut first_byte = packet_type_to_first_byte(PacketType::Publish);

    if packet.dup {
        first_byte |= PUBLISH_PACKET_FIXED_HEADER_DUPLICATE_FLAG;
    }

    first_byte |= (packet.qos as u8) << 1;

    if packet.retain {
        first_byte |= PUBLISH_PACKET_FIXED_HEADER_RETAIN_FLAG;
    }

    first_byte
}

pub(crate) fn write_publish_packet(packet: &PublishPacket, dest: &mut Vec<u8>) -> MqttResult<()> {
    let total_remaining_length = compute_publish_packet_length(packet)?;

    encode_u8(compute_publish_packet_first_byte(packet), dest);
    encode_vli(total_remaining_length, dest)?;

    encode_length_prefixed_string(&packet.topic, dest)?;

    if packet.qos != QualityOfService::AtMostOnce {
        match packet.packet_id {
            Some(packet_id) => {
                encode_u16(packet_id, dest);
            }
            None => {
                let message = "write_publish_packet - qos 1+ publish has no packet id";
                error!("{}", message);
                return Err(MqttError::new_encoding_failure(message));
            }
        }
    }

    dest.extend_from_slice(&packet.payload);

    Ok(())
}

pub(crate) fn decode_publish_packet(fixed_header: &FixedHeader, packet_body: &[u8]) -> MqttResult<Box<MqttPacket>> {
    let mut packet = PublishPacket {
        qos : fixed_header.qos,
        dup : fixed_header.dup,
        retain : fixed_header.retain,
        ..Default::default()
    };

    let mut mutable_body = packet_body;
    mutable_body = decode_length_prefixed_string(mutable_body, &mut packet.topic)?;

    if packet.qos != QualityOfService::AtMostOnce {
        let mut packet_id : u16 = 0;
        mutable_body = decode_u16(mutable_body, &mut packet_id)?;
        packet.packet_id = Some(packet_id);
    }

    /* whatever is left of the body is the message itself */
    packet.payload = mutable_body.to_vec();

    Ok(Box::new(MqttPacket::Publish(packet)))
}

impl fmt::Display for PublishPacket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PublishPacket {{")?;
        log_optional_primitive_value!(self.packet_id, f, "packet_id", value);
        log_string!(self.topic, f, "topic");
        log_enum!(self.qos, f, "qos", quality_of_service_to_str);
        log_primitive_value!(self.dup, f, "dup");
        log_primitive_value!(self.retain, f, "retain");
        log_binary_data!(self.payload, f, "payload");
        write!(f, " }}")
    }
}
