/*
 * Copyright Bret Ambrose. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/*!
A wire-protocol codec for MQTT 3.1.1 packets.

This crate translates between raw byte buffers and strongly-typed packet values, in both
directions, and nothing more.  It is intended to sit underneath a broker or client whose
transport layer frames complete packets off a connection:

* [`decode_packet`] consumes a buffer beginning at a packet's first byte and produces one
  [`MqttPacket`] variant, copying all variable-length data into buffers owned by the packet.
* [`encode_packet`] consumes a packet value and appends its exact wire rendering to a growable
  byte buffer.

The codec holds no state of any kind: no connection state machine, no session or subscription
tables, no retry timers, and no I/O.  Concurrent decode/encode calls on buffers from different
connections are safe without coordination.  Structural violations of the wire grammar are
reported through [`error::MqttError`]; a malformed packet is fatal to the connection under MQTT
semantics, but acting on that is the transport owner's job.
 */

pub mod error;
pub mod mqtt;

mod decode;
mod encode;
mod logging;

pub use decode::{decode_fixed_header, decode_packet};
pub use encode::encode_packet;
pub use error::{MqttError, MqttResult};

/* Re-export all packet data model types at the root level */
pub use mqtt::FixedHeader;
pub use mqtt::MqttPacket;
pub use mqtt::PacketType;
pub use mqtt::QualityOfService;
pub use mqtt::Subscription;

pub use mqtt::connack::ConnackPacket;
pub use mqtt::connect::{ConnectPacket, Will};
pub use mqtt::disconnect::DisconnectPacket;
pub use mqtt::pingreq::PingreqPacket;
pub use mqtt::pingresp::PingrespPacket;
pub use mqtt::puback::PubackPacket;
pub use mqtt::pubcomp::PubcompPacket;
pub use mqtt::publish::PublishPacket;
pub use mqtt::pubrec::PubrecPacket;
pub use mqtt::pubrel::PubrelPacket;
pub use mqtt::suback::SubackPacket;
pub use mqtt::subscribe::SubscribePacket;
pub use mqtt::unsuback::UnsubackPacket;
pub use mqtt::unsubscribe::UnsubscribePacket;
