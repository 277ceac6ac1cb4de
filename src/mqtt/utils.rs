/*
 * Copyright Bret Ambrose. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/*!
Module containing miscellaneous constants and conversion functions related to the MQTT specification.
 */

use crate::error::MqttError;
use crate::mqtt::*;

pub(crate) const PACKET_TYPE_CONNECT: u8 = 1;
pub(crate) const PACKET_TYPE_CONNACK: u8 = 2;
pub(crate) const PACKET_TYPE_PUBLISH: u8 = 3;
pub(crate) const PACKET_TYPE_PUBACK: u8 = 4;
pub(crate) const PACKET_TYPE_PUBREC: u8 = 5;
pub(crate) const PACKET_TYPE_PUBREL: u8 = 6;
pub(crate) const PACKET_TYPE_PUBCOMP: u8 = 7;
pub(crate) const PACKET_TYPE_SUBSCRIBE: u8 = 8;
pub(crate) const PACKET_TYPE_SUBACK: u8 = 9;
pub(crate) const PACKET_TYPE_UNSUBSCRIBE: u8 = 10;
pub(crate) const PACKET_TYPE_UNSUBACK: u8 = 11;
pub(crate) const PACKET_TYPE_PINGREQ: u8 = 12;
pub(crate) const PACKET_TYPE_PINGRESP: u8 = 13;
pub(crate) const PACKET_TYPE_DISCONNECT: u8 = 14;

pub(crate) const PUBLISH_PACKET_FIXED_HEADER_DUPLICATE_FLAG : u8 = 8;
pub(crate) const PUBLISH_PACKET_FIXED_HEADER_RETAIN_FLAG : u8 = 1;
pub(crate) const QOS_MASK : u8 = 3;

pub(crate) const CONNECT_PACKET_CLEAN_SESSION_FLAG_MASK : u8 = 1 << 1;
pub(crate) const CONNECT_PACKET_HAS_WILL_FLAG_MASK : u8 = 1 << 2;
pub(crate) const CONNECT_PACKET_WILL_RETAIN_FLAG_MASK : u8 = 1 << 5;
pub(crate) const CONNECT_PACKET_WILL_QOS_FLAG_SHIFT : u8 = 3;
pub(crate) const CONNECT_PACKET_HAS_USERNAME_FLAG_MASK : u8 = 1 << 7;
pub(crate) const CONNECT_PACKET_HAS_PASSWORD_FLAG_MASK : u8 = 1 << 6;
pub(crate) const CONNECT_PACKET_FLAGS_RESERVED_MASK : u8 = 1;

/* fixed header byte count of every member of the ack packet family */
pub(crate) const ACK_PACKET_REMAINING_LENGTH : usize = 2;

/* First byte of each packet type's fixed header, indexed by wire type value.  Entry zero is
 * unassigned.  The Publish entry is a base value; its flag nibble is composed per packet from
 * the dup, qos, and retain fields. */
static PACKET_FIRST_BYTES: [u8; 15] = [
    0x00,
    PACKET_TYPE_CONNECT << 4,
    PACKET_TYPE_CONNACK << 4,
    PACKET_TYPE_PUBLISH << 4,
    PACKET_TYPE_PUBACK << 4,
    PACKET_TYPE_PUBREC << 4,
    PACKET_TYPE_PUBREL << 4,
    PACKET_TYPE_PUBCOMP << 4,
    (PACKET_TYPE_SUBSCRIBE << 4) | 0x02u8,
    PACKET_TYPE_SUBACK << 4,
    (PACKET_TYPE_UNSUBSCRIBE << 4) | 0x02u8,
    PACKET_TYPE_UNSUBACK << 4,
    PACKET_TYPE_PINGREQ << 4,
    PACKET_TYPE_PINGRESP << 4,
    PACKET_TYPE_DISCONNECT << 4,
];

pub(crate) fn packet_type_to_first_byte(packet_type: PacketType) -> u8 {
    PACKET_FIRST_BYTES[packet_type as usize]
}

pub(crate) fn convert_u8_to_packet_type(value: u8) -> Result<PacketType, MqttError> {
    match value {
        PACKET_TYPE_CONNECT => { Ok(PacketType::Connect) }
        PACKET_TYPE_CONNACK => { Ok(PacketType::Connack) }
        PACKET_TYPE_PUBLISH => { Ok(PacketType::Publish) }
        PACKET_TYPE_PUBACK => { Ok(PacketType::Puback) }
        PACKET_TYPE_PUBREC => { Ok(PacketType::Pubrec) }
        PACKET_TYPE_PUBREL => { Ok(PacketType::Pubrel) }
        PACKET_TYPE_PUBCOMP => { Ok(PacketType::Pubcomp) }
        PACKET_TYPE_SUBSCRIBE => { Ok(PacketType::Subscribe) }
        PACKET_TYPE_SUBACK => { Ok(PacketType::Suback) }
        PACKET_TYPE_UNSUBSCRIBE => { Ok(PacketType::Unsubscribe) }
        PACKET_TYPE_UNSUBACK => { Ok(PacketType::Unsuback) }
        PACKET_TYPE_PINGREQ => { Ok(PacketType::Pingreq) }
        PACKET_TYPE_PINGRESP => { Ok(PacketType::Pingresp) }
        PACKET_TYPE_DISCONNECT => { Ok(PacketType::Disconnect) }
        _ => { Err(MqttError::new_invalid_packet_type(value)) }
    }
}

pub(crate) fn convert_u8_to_quality_of_service(value: u8) -> Result<QualityOfService, MqttError> {
    match value {
        0 => { Ok(QualityOfService::AtMostOnce) }
        1 => { Ok(QualityOfService::AtLeastOnce) }
        2 => { Ok(QualityOfService::ExactlyOnce) }
        _ => { Err(MqttError::new_invalid_qos(value)) }
    }
}

pub(crate) fn quality_of_service_to_str(qos: QualityOfService) -> &'static str {
    match qos {
        QualityOfService::AtMostOnce => { "AtMostOnce" }
        QualityOfService::AtLeastOnce => { "AtLeastOnce" }
        QualityOfService::ExactlyOnce => { "ExactlyOnce" }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn packet_type_conversions_round_trip() {
        for value in 1..=14u8 {
            let packet_type = convert_u8_to_packet_type(value).unwrap();
            assert_eq!(value, packet_type as u8);
        }
    }

    #[test]
    fn packet_type_conversion_rejects_reserved_values() {
        assert_matches!(convert_u8_to_packet_type(0), Err(MqttError::InvalidPacketType(_)));
        assert_matches!(convert_u8_to_packet_type(15), Err(MqttError::InvalidPacketType(_)));
        assert_matches!(convert_u8_to_packet_type(255), Err(MqttError::InvalidPacketType(_)));
    }

    #[test]
    fn quality_of_service_conversion_rejects_reserved_pattern() {
        assert_eq!(QualityOfService::AtMostOnce, convert_u8_to_quality_of_service(0).unwrap());
        assert_eq!(QualityOfService::AtLeastOnce, convert_u8_to_quality_of_service(1).unwrap());
        assert_eq!(QualityOfService::ExactlyOnce, convert_u8_to_quality_of_service(2).unwrap());
        assert_matches!(convert_u8_to_quality_of_service(3), Err(MqttError::InvalidQos(_)));
    }

    #[test]
    fn first_byte_table_matches_assigned_type_values() {
        for value in 1..=14u8 {
            let packet_type = convert_u8_to_packet_type(value).unwrap();
            assert_eq!(value, packet_type_to_first_byte(packet_type) >> 4);
        }
    }
}
