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

/// Data model of an [MQTT 3.1.1 PUBACK](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718043) packet: the
/// response to a QoS 1 Publish.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PubackPacket {

    /// Id of the QoS 1 publish this packet is acknowledging
    pub packet_id: u16,
}

impl PubackPacket {

    /// Builds a Puback packet acknowledging the publish with the given packet id.
    pub fn new(packet_id: u16) -> PubackPacket {
        PubackPacket {
            packet_id,
        }
    }
}

define_ack_packet_encode_function!(write_puback_packet, PubackPacket, Puback);
define_ack_packet_decode_function!(decode_puback_packet, Puback, PubackPacket, "decode_puback_packet");
define_ack_packet_display_trait!(PubackPacket, "PubackPacket");

#[cfg(test)]
mod tests {

    use super::*;
    use crate::decode::testing::*;

    #[test]
    fn puback_round_trip_encode_decode_default() {
        let packet = PubackPacket {
            ..Default::default()
        };

        assert!(do_round_trip_encode_decode_test(&MqttPacket::Puback(packet)));
    }

    #[test]
    fn puback_round_trip_encode_decode() {
        let packet = PubackPacket::new(16384);
        assert!(do_round_trip_encode_decode_test(&MqttPacket::Puback(packet)));
    }

    #[test]
    fn puback_encoding_matches_wire_layout() {
        let packet = PubackPacket::new(0x1234);
        let encoded_bytes = encode_packet_for_test(&MqttPacket::Puback(packet));

        assert_eq!(vec![0x40u8, 2u8, 0x12u8, 0x34u8], encoded_bytes);
    }

    #[test]
    fn puback_decode_failure_bad_remaining_length() {
        let packet = PubackPacket::new(123);

        let extend_length = | bytes: &[u8] | -> Vec<u8> {
            let mut clone = bytes.to_vec();
            clone[1] = 3;
            clone.push(0);
            clone
        };

        do_mutated_decode_failure_test(&MqttPacket::Puback(packet), extend_length);
    }

    #[test]
    fn puback_decode_failure_truncation() {
        let packet = PubackPacket::new(123);
        do_truncated_decode_failure_test(&MqttPacket::Puback(packet));
    }
}
