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

/// Data model of an [MQTT 3.1.1 PINGRESP](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718085) packet.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PingrespPacket {}

define_header_only_packet_encode_function!(write_pingresp_packet, PingrespPacket, Pingresp);
define_header_only_packet_decode_function!(decode_pingresp_packet, Pingresp, PingrespPacket, "decode_pingresp_packet");

impl fmt::Display for PingrespPacket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PingrespPacket {{ }}")
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::decode::testing::*;

    #[test]
    fn pingresp_round_trip_encode_decode() {
        let packet = PingrespPacket {};
        assert!(do_round_trip_encode_decode_test(&MqttPacket::Pingresp(packet)));
    }

    #[test]
    fn pingresp_encoding_matches_wire_layout() {
        let packet = PingrespPacket {};
        let encoded_bytes = encode_packet_for_test(&MqttPacket::Pingresp(packet));

        assert_eq!(vec![0xD0u8, 0u8], encoded_bytes);
    }

    #[test]
    fn pingresp_decode_failure_nonzero_remaining_length() {
        let packet = PingrespPacket {};

        let extend_length = | bytes: &[u8] | -> Vec<u8> {
            let mut clone = bytes.to_vec();

            // extend the length and add an appropriate amount of garbage bytes
            clone[1] = 4;
            clone.push(1);
            clone.push(2);
            clone.push(5);
            clone.push(6);

            clone
        };

        do_mutated_decode_failure_test(&MqttPacket::Pingresp(packet), extend_length);
    }

    #[test]
    fn pingresp_decode_failure_truncation() {
        let packet = PingrespPacket {};
        do_truncated_decode_failure_test(&MqttPacket::Pingresp(packet));
    }
}
