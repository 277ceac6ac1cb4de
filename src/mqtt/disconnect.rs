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

/// Data model of an [MQTT 3.1.1 DISCONNECT](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718090) packet:
/// the client's notice that it is closing the connection cleanly, suppressing the will message.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DisconnectPacket {}

define_header_only_packet_encode_function!(write_disconnect_packet, DisconnectPacket, Disconnect);
define_header_only_packet_decode_function!(decode_disconnect_packet, Disconnect, DisconnectPacket, "decode_disconnect_packet");

impl fmt::Display for DisconnectPacket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DisconnectPacket {{ }}")
    }
}
