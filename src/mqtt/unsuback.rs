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

/// Data model of an [MQTT 3.1.1 UNSUBACK](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718077) packet.
/// Carries no per-filter results; receipt acknowledges the whole Unsubscribe.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct UnsubackPacket {

    /// Id of the unsubscribe this packet is acknowledging
    pub packet_id: u16,
}

impl UnsubackPacket {

    /// Builds an Unsuback packet acknowledging the unsubscribe with the given packet id.
    pub fn new(packet_id: u16) -> UnsubackPacket {
        UnsubackPacket {
            packet_id,
        }
    }
}

define_ack_packet_encode_function!(write_unsuback_packet, UnsubackPacket, Unsuback);
define_ack_packet_decode_function!(decode_unsuback_packet, Unsuback, UnsubackPacket, "decode_unsuback_packet");
define_ack_packet_display_trait!(UnsubackPacket, "UnsubackPacket");
