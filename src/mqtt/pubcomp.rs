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

/// Data model of an [MQTT 3.1.1 PUBCOMP](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718058) packet: the
/// final response in the QoS 2 delivery sequence, answering a Pubrel.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PubcompPacket {

    /// Id of the QoS 2 delivery this packet completes
    pub packet_id: u16,
}

impl PubcompPacket {

    /// Builds a Pubcomp packet completing the QoS 2 delivery with the given packet id.
    pub fn new(packet_id: u16) -> PubcompPacket {
        PubcompPacket {
            packet_id,
        }
    }
}

define_ack_packet_encode_function!(write_pubcomp_packet, PubcompPacket, Pubcomp);
define_ack_packet_decode_function!(decode_pubcomp_packet, Pubcomp, PubcompPacket, "decode_pubcomp_packet");
define_ack_packet_display_trait!(PubcompPacket, "PubcompPacket");

#[cfg(test)]
mod tests {

    use super::*;
    use crate::decode::testing::*;

    #[test]
    fn pubcomp_round_trip_encode_decode_default() {
        let packet = PubcompPacket {
            ..Default::default()
        };

        assert!(do_round_trip_encode_decode_test(&MqttPacket::Pubcomp(packet)));
    }

    #[test]
    fn pubcomp_round_trip_encode_decode() {
        let packet = PubcompPacket::new(32767);
        assert!(do_round_trip_encode_decode_test(&MqttPacket::Pubcomp(packet)));
    }

    #[test]
    fn pubcomp_decode_failure_bad_remaining_length() {
        let packet = PubcompPacket::new(32767);

        let shrink_length = | bytes: &[u8] | -> Vec<u8> {
            let mut clone = bytes.to_vec();
            clone[1] = 0;
            clone.truncate(2);
            clone
        };

        do_mutated_decode_failure_test(&MqttPacket::Pubcomp(packet), shrink_length);
    }

    #[test]
    fn pubcomp_decode_failure_truncation() {
        let packet = PubcompPacket::new(32767);
        do_truncated_decode_failure_test(&MqttPacket::Pubcomp(packet));
    }
}
