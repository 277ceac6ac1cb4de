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

/// Data model of an [MQTT 3.1.1 PUBREC](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718048) packet: the
/// first response in the QoS 2 delivery sequence.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PubrecPacket {

    /// Id of the QoS 2 publish this packet is acknowledging receipt of
    pub packet_id: u16,
}

impl PubrecPacket {

    /// Builds a Pubrec packet acknowledging receipt of the publish with the given packet id.
    pub fn new(packet_id: u16) -> PubrecPacket {
        PubrecPacket {
            packet_id,
        }
    }
}

define_ack_packet_encode_function!(write_pubrec_packet, PubrecPacket, Pubrec);
define_ack_packet_decode_function!(decode_pubrec_packet, Pubrec, PubrecPacket, "decode_pubrec_packet");
define_ack_packet_display_trait!(PubrecPacket, "PubrecPacket");

#[cfg(test)]
mod tests {

    use super::*;
    use crate::decode::testing::*;

    #[test]
    fn pubrec_round_trip_encode_decode_default() {
        let packet = PubrecPacket {
            ..Default::default()
        };

        assert!(do_round_trip_encode_decode_test(&MqttPacket::Pubrec(packet)));
    }

    #[test]
    fn pubrec_round_trip_encode_decode() {
        let packet = PubrecPacket::new(65535);
        assert!(do_round_trip_encode_decode_test(&MqttPacket::Pubrec(packet)));
    }

    #[test]
    fn pubrec_encoding_matches_wire_layout() {
        let packet = PubrecPacket::new(0x0201);
        let encoded_bytes = encode_packet_for_test(&MqttPacket::Pubrec(packet));

        assert_eq!(vec![0x50u8, 2u8, 2u8, 1u8], encoded_bytes);
    }

    #[test]
    fn pubrec_decode_failure_bad_remaining_length() {
        let packet = PubrecPacket::new(42);

        let shrink_length = | bytes: &[u8] | -> Vec<u8> {
            let mut clone = bytes.to_vec();
            clone[1] = 1;
            clone.truncate(3);
            clone
        };

        do_mutated_decode_failure_test(&MqttPacket::Pubrec(packet), shrink_length);
    }

    #[test]
    fn pubrec_decode_failure_truncation() {
        let packet = PubrecPacket::new(42);
        do_truncated_decode_failure_test(&MqttPacket::Pubrec(packet));
    }
}
