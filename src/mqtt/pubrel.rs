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

/// Data model of an [MQTT 3.1.1 PUBREL](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718053) packet: the
/// response to a Pubrec, carrying the same packet id through the QoS 2 sequence.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PubrelPacket {

    /// Id of the QoS 2 delivery this packet releases
    pub packet_id: u16,
}

impl PubrelPacket {

    /// Builds a Pubrel packet releasing the QoS 2 delivery with the given packet id.
    pub fn new(packet_id: u16) -> PubrelPacket {
        PubrelPacket {
            packet_id,
        }
    }
}

define_ack_packet_encode_function!(write_pubrel_packet, PubrelPacket, Pubrel);
define_ack_packet_decode_function!(decode_pubrel_packet, Pubrel, PubrelPacket, "decode_pubrel_packet");
define_ack_packet_display_trait!(PubrelPacket, "PubrelPacket");
