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

/// Data model of an [MQTT 3.1.1 SUBSCRIBE](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718063) packet.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SubscribePacket {

    /// Packet identifier correlating this subscribe with its Suback
    pub packet_id: u16,

    /// List of topic filter + requested QoS pairs.  Must contain at least one entry; the
    /// answering Suback reports one return code per entry, in the same order.
    pub subscriptions: Vec<Subscription>,
}

fn compute_subscribe_packet_length(packet: &SubscribePacket) -> MqttResult<u32> {
    let mut total_remaining_length : usize = 2;

    for subscription in &packet.subscriptions {
        /* topic filter string plus the requested qos byte */
        total_remaining_length += 2 + subscription.topic_filter.len() + 1;
    }

    if total_remaining_length > MAXIMUM_VARIABLE_LENGTH_INTEGER {
        let message = "compute_subscribe_packet_length - remaining length exceeds the variable length integer maximum";
        error!("{}", message);
        return Err(MqttError::new_encode_overflow(message));
    }

    Ok(total_remaining_length as u32)
}

pub(crate) fn write_subscribe_packet(packet: &SubscribePacket, dest: &mut Vec<u8>) -> MqttResult<()> {
    if packet.subscriptions.is_empty() {
        let message = "write_subscribe_packet - subscription list is empty";
        error!("{}", message);
        return Err(MqttError::new_encoding_failure(message));
    }

    let total_remaining_length = compute_subscribe_packet_length(packet)?;

    encode_u8(packet_type_to_first_byte(PacketType::Subscribe), dest);
    encode_vli(total_remaining_length, dest)?;

    encode_u16(packet.packet_id, dest);

    for subscription in &packet.subscriptions {
        encode_length_prefixed_string(&subscription.topic_filter, dest)?;
        encode_u8(subscription.qos as u8, dest);
    }

    Ok(())
}

pub(crate) fn decode_subscribe_packet(_: &FixedHeader, packet_body: &[u8]) -> MqttResult<Box<MqttPacket>> {
    let mut packet = SubscribePacket { ..Default::default() };

    let mut mutable_body = packet_body;
    mutable_body = decode_u16(mutable_body, &mut packet.packet_id)?;

    while !mutable_body.is_empty() {
        let mut subscription = Subscription { ..Default::default() };

        mutable_body = decode_length_prefixed_string(mutable_body, &mut subscription.topic_filter)?;

        let mut requested_qos : u8 = 0;
        mutable_body = decode_u8(mutable_body, &mut requested_qos)?;
        subscription.qos = convert_u8_to_quality_of_service(requested_qos)?;

        packet.subscriptions.push(subscription);
    }

    if packet.subscriptions.is_empty() {
        let message = "decode_subscribe_packet - subscription list is empty";
        error!("{}", message);
        return Err(MqttError::new_decoding_failure(message));
    }

    Ok(Box::new(MqttPacket::Subscribe(packet)))
}

impl fmt::Display for SubscribePacket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SubscribePacket {{")?;
        log_primitive_value!(self.packet_id, f, "packet_id");
        write!(f, " subscriptions: [")?;
        for (i, subscription) in self.subscriptions.iter().enumerate() {
            write!(f, " {}: (\"{}\", {})", i, subscription.topic_filter, quality_of_service_to_str(subscription.qos))?;
        }
        write!(f, " ]")?;
        write!(f, " }}")
    }
}
