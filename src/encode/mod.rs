/*
 * Copyright Bret Ambrose. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/*!
Module containing the outbound half of the codec: per-type packet body encoding into a growable
byte buffer.  Every encoder computes the remaining length of the variable header and payload it
is about to write before emitting a single byte, so a buffer produced here always frames exactly
one packet.
 */

pub(crate) mod utils;

use crate::error::MqttResult;
use crate::logging::*;
use crate::mqtt::*;

use crate::mqtt::connack::*;
use crate::mqtt::connect::*;
use crate::mqtt::disconnect::*;
use crate::mqtt::pingreq::*;
use crate::mqtt::pingresp::*;
use crate::mqtt::puback::*;
use crate::mqtt::pubcomp::*;
use crate::mqtt::publish::*;
use crate::mqtt::pubrec::*;
use crate::mqtt::pubrel::*;
use crate::mqtt::suback::*;
use crate::mqtt::subscribe::*;
use crate::mqtt::unsuback::*;
use crate::mqtt::unsubscribe::*;

/// Encodes a single packet onto the end of a destination buffer.
///
/// The buffer grows as needed.  On success, returns the number of bytes appended; on failure
/// the buffer contents past its original length are unspecified and should be discarded.
pub fn encode_packet(packet: &MqttPacket, dest: &mut Vec<u8>) -> MqttResult<usize> {
    let starting_length = dest.len();

    log_packet("encode_packet - encoding outbound packet: ", packet);

    match packet {
        MqttPacket::Connect(connect) => { write_connect_packet(connect, dest)?; }
        MqttPacket::Connack(connack) => { write_connack_packet(connack, dest)?; }
        MqttPacket::Publish(publish) => { write_publish_packet(publish, dest)?; }
        MqttPacket::Puback(puback) => { write_puback_packet(puback, dest)?; }
        MqttPacket::Pubrec(pubrec) => { write_pubrec_packet(pubrec, dest)?; }
        MqttPacket::Pubrel(pubrel) => { write_pubrel_packet(pubrel, dest)?; }
        MqttPacket::Pubcomp(pubcomp) => { write_pubcomp_packet(pubcomp, dest)?; }
        MqttPacket::Subscribe(subscribe) => { write_subscribe_packet(subscribe, dest)?; }
        MqttPacket::Suback(suback) => { write_suback_packet(suback, dest)?; }
        MqttPacket::Unsubscribe(unsubscribe) => { write_unsubscribe_packet(unsubscribe, dest)?; }
        MqttPacket::Unsuback(unsuback) => { write_unsuback_packet(unsuback, dest)?; }
        MqttPacket::Pingreq(pingreq) => { write_pingreq_packet(pingreq, dest)?; }
        MqttPacket::Pingresp(pingresp) => { write_pingresp_packet(pingresp, dest)?; }
        MqttPacket::Disconnect(disconnect) => { write_disconnect_packet(disconnect, dest)?; }
    }

    Ok(dest.len() - starting_length)
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn encode_packet_appends_without_disturbing_existing_bytes() {
        let mut dest = vec![0xAAu8, 0xBBu8];

        let appended = encode_packet(&MqttPacket::Pingresp(PingrespPacket {}), &mut dest).unwrap();

        assert_eq!(2, appended);
        assert_eq!(vec![0xAAu8, 0xBBu8, 0xD0u8, 0u8], dest);
    }

    #[test]
    fn encode_packet_reports_appended_byte_count() {
        let packet = MqttPacket::Suback(SubackPacket::new(1, vec![0u8, 1u8, 2u8]));

        let mut dest = Vec::new();
        let appended = encode_packet(&packet, &mut dest).unwrap();

        // fixed header (2) + packet id (2) + three return codes
        assert_eq!(7, appended);
        assert_eq!(dest.len(), appended);
    }
}
