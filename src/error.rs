/*
 * Copyright Bret Ambrose. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/*!
A module containing the core crate error enumeration, context structures, and conversion
definitions.
 */

use std::error::Error;
use std::fmt;

/// Additional details about a MalformedVarint error variant
#[derive(Debug)]
pub struct MalformedVarintContext {
}

/// Additional details about a TruncatedBuffer error variant
#[derive(Debug)]
pub struct TruncatedBufferContext {
    source: Box<dyn Error + Send + Sync + 'static>
}

/// Additional details about an InvalidPacketType error variant
#[derive(Debug)]
pub struct InvalidPacketTypeContext {

    /// raw packet type value encountered on the wire
    pub packet_type: u8,
}

/// Additional details about an InvalidQos error variant
#[derive(Debug)]
pub struct InvalidQosContext {

    /// raw quality of service value encountered on the wire
    pub qos: u8,
}

/// Additional details about a RemainingLengthMismatch error variant
#[derive(Debug)]
pub struct RemainingLengthMismatchContext {
    source: Box<dyn Error + Send + Sync + 'static>
}

/// Additional details about an EncodeOverflow error variant
#[derive(Debug)]
pub struct EncodeOverflowContext {
    source: Box<dyn Error + Send + Sync + 'static>
}

/// Additional details about a DecodingFailure error variant
#[derive(Debug)]
pub struct DecodingFailureContext {
    source: Box<dyn Error + Send + Sync + 'static>
}

/// Additional details about an EncodingFailure error variant
#[derive(Debug)]
pub struct EncodingFailureContext {
    source: Box<dyn Error + Send + Sync + 'static>
}

/// Basic error type for the entire crate.
#[derive(Debug)]
#[non_exhaustive]
pub enum MqttError {

    /// Error emitted when a remaining length field uses more than the four bytes the MQTT
    /// specification permits for a variable length integer.
    MalformedVarint(MalformedVarintContext),

    /// Error emitted when a buffer runs out of bytes before a declared field or remaining
    /// length could be read in full.
    TruncatedBuffer(TruncatedBufferContext),

    /// Error emitted when the packet type nibble of a fixed header is outside the 1-14 range
    /// assigned by the MQTT specification.
    InvalidPacketType(InvalidPacketTypeContext),

    /// Error emitted when a quality of service bit pattern does not correspond to one of the
    /// three levels defined by the MQTT specification.
    InvalidQos(InvalidQosContext),

    /// Error emitted when a packet body decoder would consume a different number of bytes than
    /// the fixed header's remaining length field declared.
    RemainingLengthMismatch(RemainingLengthMismatchContext),

    /// Error emitted when an outbound packet cannot be encoded within the size limits of the
    /// wire format (variable length integer maximum, u16 length prefixes).
    EncodeOverflow(EncodeOverflowContext),

    /// Error encountered while attempting to decode an MQTT packet whose bytes violate the
    /// wire grammar in a way not covered by a more specific variant.  Examples include bad
    /// utf-8, reserved bits set, and an empty subscription list.
    DecodingFailure(DecodingFailureContext),

    /// Error encountered while attempting to encode an MQTT packet whose field values cannot
    /// be legally represented on the wire.
    EncodingFailure(EncodingFailureContext),
}

impl MqttError {

    pub(crate) fn new_malformed_varint() -> Self {
        MqttError::MalformedVarint(
            MalformedVarintContext {
            }
        )
    }

    pub(crate) fn new_truncated_buffer(source: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self {
        MqttError::TruncatedBuffer(
            TruncatedBufferContext {
                source : source.into()
            }
        )
    }

    pub(crate) fn new_invalid_packet_type(packet_type: u8) -> Self {
        MqttError::InvalidPacketType(
            InvalidPacketTypeContext {
                packet_type
            }
        )
    }

    pub(crate) fn new_invalid_qos(qos: u8) -> Self {
        MqttError::InvalidQos(
            InvalidQosContext {
                qos
            }
        )
    }

    pub(crate) fn new_remaining_length_mismatch(source: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self {
        MqttError::RemainingLengthMismatch(
            RemainingLengthMismatchContext {
                source : source.into()
            }
        )
    }

    pub(crate) fn new_encode_overflow(source: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self {
        MqttError::EncodeOverflow(
            EncodeOverflowContext {
                source : source.into()
            }
        )
    }

    pub(crate) fn new_decoding_failure(source: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self {
        MqttError::DecodingFailure(
            DecodingFailureContext {
                source : source.into()
            }
        )
    }

    pub(crate) fn new_encoding_failure(source: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self {
        MqttError::EncodingFailure(
            EncodingFailureContext {
                source : source.into()
            }
        )
    }
}

impl Error for MqttError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MqttError::TruncatedBuffer(context) => {
                Some(context.source.as_ref())
            }
            MqttError::RemainingLengthMismatch(context) => {
                Some(context.source.as_ref())
            }
            MqttError::EncodeOverflow(context) => {
                Some(context.source.as_ref())
            }
            MqttError::DecodingFailure(context) => {
                Some(context.source.as_ref())
            }
            MqttError::EncodingFailure(context) => {
                Some(context.source.as_ref())
            }
            _ => { None }
        }
    }
}

impl fmt::Display for MqttError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MqttError::MalformedVarint(_) => {
                write!(f, "remaining length field used more than four variable length integer bytes")
            }
            MqttError::TruncatedBuffer(_) => {
                write!(f, "buffer ran out of bytes before a declared field could be read; source contains further details")
            }
            MqttError::InvalidPacketType(context) => {
                write!(f, "packet type value ({}) is outside the range assigned by the mqtt spec", context.packet_type)
            }
            MqttError::InvalidQos(context) => {
                write!(f, "quality of service value ({}) is not a level defined by the mqtt spec", context.qos)
            }
            MqttError::RemainingLengthMismatch(_) => {
                write!(f, "packet body length does not agree with the fixed header's remaining length field")
            }
            MqttError::EncodeOverflow(_) => {
                write!(f, "outbound packet does not fit within the size limits of the wire format")
            }
            MqttError::DecodingFailure(_) => {
                write!(f, "failure encountered while decoding an incoming MQTT packet; source contains further details")
            }
            MqttError::EncodingFailure(_) => {
                write!(f, "failure encountered while encoding an outbound MQTT packet; source contains further details")
            }
        }
    }
}

impl From<core::str::Utf8Error> for MqttError {
    fn from(err: core::str::Utf8Error) -> Self {
        MqttError::new_decoding_failure(err)
    }
}

/// Crate-wide result type for functions that can fail
pub type MqttResult<T> = Result<T, MqttError>;
