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

/// Will message configured on a Connect packet.  Published by the broker on the will topic if
/// the connection is lost without a clean Disconnect.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Will {

    /// Topic the will message should be published to
    pub topic: String,

    /// Quality of service the will message should be published with
    pub qos: QualityOfService,

    /// True if the will message should be retained by the broker
    pub retain: bool,

    /// Payload of the will message
    pub message: Vec<u8>,
}

/// Data model of an [MQTT 3.1.1 CONNECT](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718028) packet.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConnectPacket {

    /// Maximum time interval, in seconds, that is permitted to elapse between client control
    /// packets before the broker may close the connection.  Zero disables keep alive processing.
    pub keep_alive_interval_seconds: u16,

    /// True requests that the broker discard any existing session state for this client id and
    /// not persist state from this connection.
    pub clean_session: bool,

    /// Client identifier presented to the broker.  May be empty when clean_session is set.
    pub client_id: String,

    /// Username to authenticate the connection with.  Present on the wire iff the username
    /// connect flag is set.
    pub username: Option<String>,

    /// Password (or other binary credential) to authenticate the connection with.  Present on
    /// the wire iff the password connect flag is set.
    pub password: Option<Vec<u8>>,

    /// Will message to register with this connection.  The will topic and will message appear
    /// in the payload together iff the will connect flag is set.
    pub will: Option<Will>,
}

/* protocol name "MQTT" as a length-prefixed string, followed by protocol level 4 */
static CONNECT_PROTOCOL_BYTES: [u8; 7] = [0, 4, 77, 81, 84, 84, 4];

fn compute_connect_flags(packet: &ConnectPacket) -> u8 {
    let mut flags: u8 = 0;
    if packet.clean_session {
        flags |= CONNECT_PACKET_CLEAN_SESSION_FLAG_MASK;
    }

    if let Some(will) = &packet.will {
        flags |= CONNECT_PACKET_HAS_WILL_FLAG_MASK;
        flags |= (will.qos as u8) << CONNECT_PACKET_WILL_QOS_FLAG_SHIFT;
        if will.retain {
            flags |= CONNECT_PACKET_WILL_RETAIN_FLAG_MASK;
        }
    }

    if packet.password.is_some() {
        flags |= CONNECT_PACKET_HAS_PASSWORD_FLAG_MASK;
    }

    if packet.username.is_some() {
        flags |= CONNECT_PACKET_HAS_USERNAME_FLAG_MASK;
    }

    flags
}

fn compute_connect_packet_length(packet: &ConnectPacket) -> MqttResult<u32> {

    /* variable header length = 6 for the protocol name string, 1 for the protocol level,
     * 1 for the connect flags, 2 for keep alive */
    let variable_header_length : usize = CONNECT_PROTOCOL_BYTES.len() + 3;

    let mut payload_length : usize = 2 + packet.client_id.len();

    if let Some(will) = &packet.will {
        payload_length += 2 + will.topic.len();
        payload_length += 2 + will.message.len();
    }

    if let Some(username) = &packet.username {
        payload_length += 2 + username.len();
    }

    if let Some(password) = &packet.password {
        payload_length += 2 + password.len();
    }

    let total_remaining_length : usize = payload_length + variable_header_length;

    if total_remaining_length > MAXIMUM_VARIABLE_LENGTH_INTEGER {
        let message = "compute_connect_packet_length - remaining length exceeds the variable length integer maximum";
        error!("{}", message);
        return Err(MqttError::new_encode_overflow(message));
    }

    Ok(total_remaining_length as u32)
}

pub(crate) fn write_connect_packet(packet: &ConnectPacket, dest: &mut Vec<u8>) -> MqttResult<()> {
    let total_remaining_length = compute_connect_packet_length(packet)?;

    encode_u8(packet_type_to_first_byte(PacketType::Connect), dest);
    encode_vli(total_remaining_length, dest)?;
    dest.extend_from_slice(&CONNECT_PROTOCOL_BYTES);
    encode_u8(compute_connect_flags(packet), dest);
    encode_u16(packet.keep_alive_interval_seconds, dest);

    encode_length_prefixed_string(&packet.client_id, dest)?;

    if let Some(will) = &packet.will {
        encode_length_prefixed_string(&will.topic, dest)?;
        encode_length_prefixed_bytes(&will.message, dest)?;
    }

    if let Some(username) = &packet.username {
        encode_length_prefixed_string(username, dest)?;
    }

    if let Some(password) = &packet.password {
        encode_length_prefixed_bytes(password, dest)?;
    }

    Ok(())
}

pub(crate) fn decode_connect_packet(_: &FixedHeader, packet_body: &[u8]) -> MqttResult<Box<MqttPacket>> {
    let mut packet = ConnectPacket { ..Default::default() };
    let mut mutable_body = packet_body;

    /* protocol name and level are read structurally and skipped; which protocol versions to
     * accept is a connection-state decision that belongs to the caller */
    let mut protocol_name_length : u16 = 0;
    mutable_body = decode_u16(mutable_body, &mut protocol_name_length)?;

    if mutable_body.len() < (protocol_name_length as usize) + 1 {
        let message = "decode_connect_packet - protocol name and level extend past the packet body";
        error!("{}", message);
        return Err(MqttError::new_truncated_buffer(message));
    }
    mutable_body = &mutable_body[(protocol_name_length as usize) + 1..];

    let mut connect_flags : u8 = 0;
    mutable_body = decode_u8(mutable_body, &mut connect_flags)?;

    if (connect_flags & CONNECT_PACKET_FLAGS_RESERVED_MASK) != 0 {
        let message = "decode_connect_packet - connect flags reserved bit set";
        error!("{}", message);
        return Err(MqttError::new_decoding_failure(message));
    }

    packet.clean_session = (connect_flags & CONNECT_PACKET_CLEAN_SESSION_FLAG_MASK) != 0;
    let has_will = (connect_flags & CONNECT_PACKET_HAS_WILL_FLAG_MASK) != 0;
    let will_retain = (connect_flags & CONNECT_PACKET_WILL_RETAIN_FLAG_MASK) != 0;
    let will_qos = convert_u8_to_quality_of_service((connect_flags >> CONNECT_PACKET_WILL_QOS_FLAG_SHIFT) & QOS_MASK)?;

    if !has_will && (will_retain || will_qos != QualityOfService::AtMostOnce) {
        let message = "decode_connect_packet - no will but will flags set";
        error!("{}", message);
        return Err(MqttError::new_decoding_failure(message));
    }

    let has_username = (connect_flags & CONNECT_PACKET_HAS_USERNAME_FLAG_MASK) != 0;
    let has_password = (connect_flags & CONNECT_PACKET_HAS_PASSWORD_FLAG_MASK) != 0;

    mutable_body = decode_u16(mutable_body, &mut packet.keep_alive_interval_seconds)?;
    mutable_body = decode_length_prefixed_string(mutable_body, &mut packet.client_id)?;

    if has_will {
        let mut will = Will {
            qos : will_qos,
            retain : will_retain,
            ..Default::default()
        };

        mutable_body = decode_length_prefixed_string(mutable_body, &mut will.topic)?;
        mutable_body = decode_length_prefixed_bytes(mutable_body, &mut will.message)?;

        packet.will = Some(will);
    }

    if has_username {
        mutable_body = decode_optional_length_prefixed_string(mutable_body, &mut packet.username)?;
    }

    if has_password {
        mutable_body = decode_optional_length_prefixed_bytes(mutable_body, &mut packet.password)?;
    }

    if !mutable_body.is_empty() {
        let message = "decode_connect_packet - decoded body length does not match the declared remaining length";
        error!("{}", message);
        return Err(MqttError::new_remaining_length_mismatch(message));
    }

    Ok(Box::new(MqttPacket::Connect(packet)))
}

impl fmt::Display for ConnectPacket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ConnectPacket {{")?;
        log_primitive_value!(self.keep_alive_interval_seconds, f, "keep_alive_interval_seconds");
        log_primitive_value!(self.clean_session, f, "clean_session");
        log_string!(self.client_id, f, "client_id");
        log_optional_string!(self.username, f, "username", value);
        log_optional_binary_data_sensitive!(self.password, f, "password");
        if let Some(will) = &self.will {
            write!(f, " will: {{")?;
            log_string!(will.topic, f, "topic");
            log_enum!(will.qos, f, "qos", quality_of_service_to_str);
            log_primitive_value!(will.retain, f, "retain");
            log_binary_data!(will.message, f, "message");
            write!(f, " }}")?;
        }
        write!(f, " }}")
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::decode::testing::*;

    #[test]
    fn connect_round_trip_encode_decode_default() {
        let packet = ConnectPacket {
            ..Default::default()
        };

        assert!(do_round_trip_encode_decode_test(&MqttPacket::Connect(packet)));
    }

    #[test]
    fn connect_round_trip_encode_decode_basic() {
        let packet = ConnectPacket {
            keep_alive_interval_seconds : 60,
            clean_session : true,
            client_id : "dev1".to_string(),
            ..Default::default()
        };

        let encoded_bytes = encode_packet_for_test(&MqttPacket::Connect(packet.clone()));

        // flags byte follows the 7 protocol bytes and the fixed header (2 bytes here)
        assert_eq!(0b0000_0010u8, encoded_bytes[9]);

        let decoded_packet = crate::decode::decode_packet(encoded_bytes.as_slice()).unwrap();
        assert_eq!(MqttPacket::Connect(packet), *decoded_packet);
    }

    fn create_connect_all_fields() -> ConnectPacket {
        ConnectPacket {
            keep_alive_interval_seconds : 1200,
            clean_session : false,
            client_id : "sensor-gateway-11".to_string(),
            username : Some("device-user".to_string()),
            password : Some("device-password".as_bytes().to_vec()),
            will : Some(Will {
                topic : "devices/sensor-gateway-11/status".to_string(),
                qos : QualityOfService::AtLeastOnce,
                retain : true,
                message : "offline".as_bytes().to_vec(),
            }),
        }
    }

    #[test]
    fn connect_round_trip_encode_decode_all_fields() {
        let packet = create_connect_all_fields();
        assert!(do_round_trip_encode_decode_test(&MqttPacket::Connect(packet)));
    }

    #[test]
    fn connect_round_trip_encode_decode_will_only() {
        let packet = ConnectPacket {
            keep_alive_interval_seconds : 30,
            clean_session : true,
            client_id : "w".to_string(),
            will : Some(Will {
                topic : "last/words".to_string(),
                qos : QualityOfService::ExactlyOnce,
                retain : false,
                message : vec![0u8, 1u8, 2u8],
            }),
            ..Default::default()
        };

        assert!(do_round_trip_encode_decode_test(&MqttPacket::Connect(packet)));
    }

    #[test]
    fn connect_decode_failure_reserved_flag_set() {
        let packet = ConnectPacket {
            keep_alive_interval_seconds : 60,
            clean_session : true,
            client_id : "dev1".to_string(),
            ..Default::default()
        };

        let set_reserved_flag = | bytes: &[u8] | -> Vec<u8> {
            let mut clone = bytes.to_vec();
            clone[9] |= 0x01;
            clone
        };

        do_mutated_decode_failure_test(&MqttPacket::Connect(packet), set_reserved_flag);
    }

    #[test]
    fn connect_decode_failure_will_flags_without_will() {
        let packet = ConnectPacket {
            keep_alive_interval_seconds : 60,
            clean_session : true,
            client_id : "dev1".to_string(),
            ..Default::default()
        };

        let set_will_qos_without_will = | bytes: &[u8] | -> Vec<u8> {
            let mut clone = bytes.to_vec();
            clone[9] |= 1u8 << CONNECT_PACKET_WILL_QOS_FLAG_SHIFT;
            clone
        };

        do_mutated_decode_failure_test(&MqttPacket::Connect(packet), set_will_qos_without_will);
    }

    #[test]
    fn connect_decode_failure_trailing_bytes() {
        let packet = create_connect_all_fields();

        let add_trailing_byte = | bytes: &[u8] | -> Vec<u8> {
            let mut clone = bytes.to_vec();
            clone[1] += 1;
            clone.push(0);
            clone
        };

        do_mutated_decode_failure_test(&MqttPacket::Connect(packet), add_trailing_byte);
    }

    #[test]
    fn connect_decode_failure_truncation() {
        let packet = create_connect_all_fields();
        do_truncated_decode_failure_test(&MqttPacket::Connect(packet));
    }
}
