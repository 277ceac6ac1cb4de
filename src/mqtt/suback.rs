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

/// Return code granting a subscription at QoS 0.
pub const SUBACK_RETURN_CODE_SUCCESS_QOS0 : u8 = 0;

/// Return code granting a subscription at QoS 1.
pub const SUBACK_RETURN_CODE_SUCCESS_QOS1 : u8 = 1;

/// Return code granting a subscription at QoS 2.
pub const SUBACK_RETURN_CODE_SUCCESS_QOS2 : u8 = 2;

/// Return code rejecting a subscription.
pub const SUBACK_RETURN_CODE_FAILURE : u8 = 0x80;

/// Data model of an [MQTT 3.1.1 SUBACK](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718068) packet.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SubackPacket {

    /// Id of the subscribe this packet is acknowledging
    pub packet_id: u16,

    /// One raw return code per topic filter in the originating Subscribe packet, in the same
    /// order.  The values assigned by the MQTT specification are exposed as the
    /// `SUBACK_RETURN_CODE_*` constants.
    pub return_codes: Vec<u8>,
}

impl SubackPacket {

    /// Builds a Suback packet answering the subscribe with the given packet id.  The packet
    /// takes ownership of the return code sequence.
    pub fn new(packet_id: u16, return_codes: Vec<u8>) -> SubackPacket {
        SubackPacket {
            packet_id,
            return_codes,
        }
    }
}

fn compute_suback_packet_length(packet: &SubackPacket) -> MqttResult<u32> {
    let total_remaining_length : usize = 2 + packet.return_codes.len();

    if total_remaining_length > MAXIMUM_VARIABLE_LENGTH_INTEGER {
        let message = "compute_suback_packet_length - remaining length exceeds the variable length integer maximum";
        error!("{}", message);
        return Err(MqttError::new_encode_overflow(message));
    }

    Ok(total_remaining_length as u32)
}

pub(crate) fn write_suback_packet(packet: &SubackPacket, dest: &mut Vec<u8>) -> MqttResult<()> {
    let total_remaining_length = compute_suback_packet_length(packet)?;

    encode_u8(packet_type_to_first_byte(PacketType::Suback), dest);
    encode_vli(total_remaining_length, dest)?;

    encode_u16(packet.packet_id, dest);
    dest.extend_from_slice(&packet.return_codes);

    Ok(())
}

pub(crate) fn decode_suback_packet(_: &FixedHeader, packet_body: &[u8]) -> MqttResult<Box<MqttPacket>> {
    let mut packet = SubackPacket { ..Default::default() };

    let mut mutable_body = packet_body;
    mutable_body = decode_u16(mutable_body, &mut packet.packet_id)?;

    packet.return_codes = mutable_body.to_vec();

    Ok(Box::new(MqttPacket::Suback(packet)))
}

impl fmt::Display for SubackPacket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SubackPacket {{")?;
        log_primitive_value!(self.packet_id, f, "packet_id");
        write!(f, " return_codes: [")?;
        for (i, return_code) in self.return_codes.iter().enumerate() {
            write!(f, " {}: {}", i, return_code)?;
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
    fn suback_round_trip_encode_decode_default() {
        let packet = SubackPacket {
            ..Default::default()
        };

        assert!(do_round_trip_encode_decode_test(&MqttPacket::Suback(packet)));
    }

    #[test]
    fn suback_round_trip_encode_decode_mixed_results() {
        let packet = SubackPacket::new(1023, vec![
            SUBACK_RETURN_CODE_SUCCESS_QOS1,
            SUBACK_RETURN_CODE_FAILURE,
            SUBACK_RETURN_CODE_SUCCESS_QOS2,
        ]);

        assert!(do_round_trip_encode_decode_test(&MqttPacket::Suback(packet)));
    }

    #[test]
    fn suback_encoding_matches_wire_layout() {
        let packet = SubackPacket::new(0x0102, vec![0u8, 2u8]);
        let encoded_bytes = encode_packet_for_test(&MqttPacket::Suback(packet));

        assert_eq!(vec![0x90u8, 4u8, 1u8, 2u8, 0u8, 2u8], encoded_bytes);
    }

    #[test]
    fn suback_decode_failure_truncation() {
        let packet = SubackPacket::new(1023, vec![0u8, 1u8, 2u8]);
        do_truncated_decode_failure_test(&MqttPacket::Suback(packet));
    }
}
