/*
 * Copyright Bret Ambrose. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::decode::utils::*;
use crate::encode::utils::*;
use crate::error::{MqttError, MqttResult};
use crate::mqtt::*;
use crate::mqtt::utils::*;

use log::*;
use std::fmt;

/// Data model of an [MQTT 3.1.1 PINGREQ](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718081) packet.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PingreqPacket {}

define_header_only_packet_encode_function!(write_pingreq_packet, PingreqPacket, Pingreq);
define_header_only_packet_decode_function!(decode_pingreq_packet, Pingreq, PingreqPacket, "decode_pingreq_packet");

impl fmt::Display for PingreqPacket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PingreqPacket {{ }}")
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::decode::testing::*;

    #[test]
    fn pingreq_round_trip_encode_decode() {
        let packet = PingreqPacket {};
        assert!(do_round_trip_encode_decode_test(&MqttPacket::Pingreq(packet)));
    }

    #[test]
    fn pingreq_encoding_matches_wire_layout() {
        let packet = PingreqPacket {};
        let encoded_bytes = encode_packet_for_test(&MqttPacket::Pingreq(packet));

        assert_eq!(vec![0xC0u8, 0u8], encoded_bytes);
    }

    #[test]
    fn pingreq_decode_failure_nonzero_remaining_length() {
        let packet = PingreqPacket {};

        let extend_length = | bytes: &[u8] | -> Vec<u8> {
            let mut clone = bytes.to_vec();
            clone[1] = 2;
            clone.push(3);
            clone.push(4);
            clone
        };

        do_mutated_decode_failure_test(&MqttPacket::Pingreq(packet), extend_length);
    }

    #[test]
    fn pingreq_decode_failure_truncation() {
        let packet = PingreqPacket {};
        do_truncated_decode_failure_test(&MqttPacket::Pingreq(packet));
    }
}
