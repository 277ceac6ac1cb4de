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

/// Connection accepted.
pub const CONNECT_RETURN_CODE_ACCEPTED : u8 = 0;

/// The broker does not support the protocol level requested by the client.
pub const CONNECT_RETURN_CODE_UNACCEPTABLE_PROTOCOL_VERSION : u8 = 1;

/// The client identifier is well-formed but not allowed by the broker.
pub const CONNECT_RETURN_CODE_IDENTIFIER_REJECTED : u8 = 2;

/// The network connection was made but the MQTT service is unavailable.
pub const CONNECT_RETURN_CODE_SERVER_UNAVAILABLE : u8 = 3;

/// The data in the username or password is malformed.
pub const CONNECT_RETURN_CODE_BAD_USERNAME_OR_PASSWORD : u8 = 4;

/// The client is not authorized to connect.
pub const CONNECT_RETURN_CODE_NOT_AUTHORIZED : u8 = 5;

const CONNACK_SESSION_PRESENT_FLAG_MASK : u8 = 1;

/// Data model of an [MQTT 3.1.1 CONNACK](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718033) packet.
///
/// A Connack carries no packet identifier; it answers the connection's single Connect.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ConnackPacket {

    /// True if the broker is resuming an existing session for this client id
    pub session_present: bool,

    /// Raw connection return code.  Zero is success; the nonzero values assigned by the MQTT
    /// specification are exposed as the `CONNECT_RETURN_CODE_*` constants.  Interpretation is
    /// left to the caller.
    pub return_code: u8,
}

impl ConnackPacket {

    /// Builds a Connack packet from the broker's session lookup result and return code.
    pub fn new(session_present: bool, return_code: u8) -> ConnackPacket {
        ConnackPacket {
            session_present,
            return_code,
        }
    }
}

pub(crate) fn write_connack_packet(packet: &ConnackPacket, dest: &mut Vec<u8>) -> MqttResult<()> {
    encode_u8(packet_type_to_first_byte(PacketType::Connack), dest);
    encode_vli(ACK_PACKET_REMAINING_LENGTH as u32, dest)?;

    let mut acknowledge_flags : u8 = 0;
    if packet.session_present {
        acknowledge_flags |= CONNACK_SESSION_PRESENT_FLAG_MASK;
    }

    encode_u8(acknowledge_flags, dest);
    encode_u8(packet.return_code, dest);

    Ok(())
}

pub(crate) fn decode_connack_packet(_: &FixedHeader, packet_body: &[u8]) -> MqttResult<Box<MqttPacket>> {
    if packet_body.len() != ACK_PACKET_REMAINING_LENGTH {
        let message = "decode_connack_packet - remaining length must be exactly 2";
        error!("{}", message);
        return Err(MqttError::new_remaining_length_mismatch(message));
    }

    let mut packet = ConnackPacket { ..Default::default() };

    let mut mutable_body = packet_body;
    let mut acknowledge_flags : u8 = 0;
    mutable_body = decode_u8(mutable_body, &mut acknowledge_flags)?;

    if (acknowledge_flags & !CONNACK_SESSION_PRESENT_FLAG_MASK) != 0 {
        let message = "decode_connack_packet - acknowledge flags reserved bits set";
        error!("{}", message);
        return Err(MqttError::new_decoding_failure(message));
    }

    packet.session_present = (acknowledge_flags & CONNACK_SESSION_PRESENT_FLAG_MASK) != 0;

    decode_u8(mutable_body, &mut packet.return_code)?;

    Ok(Box::new(MqttPacket::Connack(packet)))
}

impl fmt::Display for ConnackPacket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ConnackPacket {{")?;
        log_primitive_value!(self.session_present, f, "session_present");
        log_primitive_value!(self.return_code, f, "return_code");
        write!(f, " }}")
    }
}
