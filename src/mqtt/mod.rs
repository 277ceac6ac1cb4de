/*
 * Copyright Bret Ambrose. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/*!
Module containing a set of structured data types that model the MQTT 3.1.1 specification.
 */

use std::fmt;

use crate::error::MqttError;

pub(crate) mod connack;
pub(crate) mod connect;
pub(crate) mod disconnect;
pub(crate) mod pingreq;
pub(crate) mod pingresp;
pub(crate) mod puback;
pub(crate) mod pubcomp;
pub(crate) mod publish;
pub(crate) mod pubrec;
pub(crate) mod pubrel;
pub(crate) mod suback;
pub(crate) mod subscribe;
pub(crate) mod unsuback;
pub(crate) mod unsubscribe;
pub(crate) mod utils;

pub use connack::ConnackPacket;
pub use connect::{ConnectPacket, Will};
pub use disconnect::DisconnectPacket;
pub use pingreq::PingreqPacket;
pub use pingresp::PingrespPacket;
pub use puback::PubackPacket;
pub use pubcomp::PubcompPacket;
pub use publish::PublishPacket;
pub use pubrec::PubrecPacket;
pub use pubrel::PubrelPacket;
pub use suback::SubackPacket;
pub use subscribe::SubscribePacket;
pub use unsuback::UnsubackPacket;
pub use unsubscribe::UnsubscribePacket;

/// MQTT message delivery quality of service.
///
/// Enum values match [MQTT 3.1.1 spec](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718099) encoding values.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum QualityOfService {

    /// The message is delivered according to the capabilities of the underlying network. No response is sent by the
    /// receiver and no retry is performed by the sender. The message arrives at the receiver either once or not at all.
    #[default]
    AtMostOnce = 0,

    /// A level of service that ensures that the message arrives at the receiver at least once.
    AtLeastOnce = 1,

    /// A level of service that ensures that the message arrives at the receiver exactly once.
    ExactlyOnce = 2,
}

impl TryFrom<u8> for QualityOfService {
    type Error = MqttError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        utils::convert_u8_to_quality_of_service(value)
    }
}

/// An enum indicating the kind of MQTT packet.
///
/// Enum values match the packet type field of the fixed header's first byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PacketType {

    /// A [Connect](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718028) packet
    Connect = 1,

    /// A [Connack](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718033) packet
    Connack = 2,

    /// A [Publish](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718037) packet
    Publish = 3,

    /// A [Puback](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718043) packet
    Puback = 4,

    /// A [Pubrec](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718048) packet
    Pubrec = 5,

    /// A [Pubrel](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718053) packet
    Pubrel = 6,

    /// A [Pubcomp](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718058) packet
    Pubcomp = 7,

    /// A [Subscribe](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718063) packet
    Subscribe = 8,

    /// A [Suback](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718068) packet
    Suback = 9,

    /// An [Unsubscribe](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718072) packet
    Unsubscribe = 10,

    /// An [Unsuback](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718077) packet
    Unsuback = 11,

    /// A [Pingreq](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718081) packet
    Pingreq = 12,

    /// A [Pingresp](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718085) packet
    Pingresp = 13,

    /// A [Disconnect](http://docs.oasis-open.org/mqtt/mqtt/v3.1.1/os/mqtt-v3.1.1-os.html#_Toc398718090) packet
    Disconnect = 14,
}

impl TryFrom<u8> for PacketType {
    type Error = MqttError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        utils::convert_u8_to_packet_type(value)
    }
}

impl fmt::Display for PacketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PacketType::Connect => { write!(f, "ConnectPacket") }
            PacketType::Connack => { write!(f, "ConnackPacket") }
            PacketType::Publish => { write!(f, "PublishPacket") }
            PacketType::Puback => { write!(f, "PubackPacket") }
            PacketType::Pubrec => { write!(f, "PubrecPacket") }
            PacketType::Pubrel => { write!(f, "PubrelPacket") }
            PacketType::Pubcomp => { write!(f, "PubcompPacket") }
            PacketType::Subscribe => { write!(f, "SubscribePacket") }
            PacketType::Suback => { write!(f, "SubackPacket") }
            PacketType::Unsubscribe => { write!(f, "UnsubscribePacket") }
            PacketType::Unsuback => { write!(f, "UnsubackPacket") }
            PacketType::Pingreq => { write!(f, "PingreqPacket") }
            PacketType::Pingresp => { write!(f, "PingrespPacket") }
            PacketType::Disconnect => { write!(f, "DisconnectPacket") }
        }
    }
}

/// Decoded form of the first byte of an MQTT packet plus its remaining length field.
///
/// The dup, qos, and retain flags only carry meaning for Publish packets.  Decoding does not
/// reject nonzero flag bits on other packet types; whether to treat them as a protocol
/// violation is left to the caller.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FixedHeader {

    /// The kind of packet that follows this header
    pub packet_type: PacketType,

    /// True if this packet is a retransmission of an earlier delivery attempt
    pub dup: bool,

    /// Delivery quality of service encoded in bits 2-1 of the first byte
    pub qos: QualityOfService,

    /// True if the broker should store this packet's message as the last known value for its topic
    pub retain: bool,
}

/// Specifies a single subscription within a Subscribe packet: a topic filter and the maximum
/// quality of service requested for publishes matching it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Subscription {

    /// Topic filter to subscribe to
    pub topic_filter: String,

    /// Maximum QoS on which the subscriber will accept publish messages.  Granted QoS may be
    /// different and is reported per-filter in the answering Suback packet.
    pub qos: QualityOfService,
}

/// Algebraic union of all MQTT 3.1.1 packet types.
///
/// Every decode produces one of these and every encode consumes one; the discriminant always
/// agrees with the packet type field of the wire fixed header.  All variable-length data inside
/// a variant is owned by that variant and freed when it is dropped.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MqttPacket {
    Connect(ConnectPacket),
    Connack(ConnackPacket),
    Publish(PublishPacket),
    Puback(PubackPacket),
    Pubrec(PubrecPacket),
    Pubrel(PubrelPacket),
    Pubcomp(PubcompPacket),
    Subscribe(SubscribePacket),
    Suback(SubackPacket),
    Unsubscribe(UnsubscribePacket),
    Unsuback(UnsubackPacket),
    Pingreq(PingreqPacket),
    Pingresp(PingrespPacket),
    Disconnect(DisconnectPacket),
}
