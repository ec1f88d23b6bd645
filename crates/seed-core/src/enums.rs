//! Closed value pools for choice fields.
//!
//! Every choice field on a collection is backed by one of these enums so that
//! an invalid value is unrepresentable at synthesis time. Each enum exposes
//! its full pool as `ALL` (used both for schema choice lists and for uniform
//! sampling) and a stable string form via `as_str`.

use std::fmt;

macro_rules! choice_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every value in the pool, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The stable string form stored in the backing collection.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// String forms of the whole pool, for schema choice lists.
            pub fn labels() -> Vec<String> {
                Self::ALL.iter().map(|v| v.as_str().to_string()).collect()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

choice_enum! {
    /// Patient gender.
    Gender {
        Male => "Male",
        Female => "Female",
        Other => "Other",
    }
}

choice_enum! {
    /// Where a patient currently sits in their care journey.
    PatientStatus {
        New => "New",
        InTreatment => "In Treatment",
        AwaitingFollowUp => "Awaiting Follow-up",
        HighPriority => "High Priority",
        Discharged => "Discharged",
    }
}

choice_enum! {
    /// Doctor specialization.
    Specialization {
        Cardiology => "Cardiology",
        Dermatology => "Dermatology",
        Neurology => "Neurology",
        Oncology => "Oncology",
        Pediatrics => "Pediatrics",
        Orthopedics => "Orthopedics",
        Radiology => "Radiology",
        GeneralPractice => "General Practice",
        Psychiatry => "Psychiatry",
        Endocrinology => "Endocrinology",
    }
}

choice_enum! {
    /// Hospital department a doctor belongs to.
    Department {
        Outpatient => "Outpatient",
        Inpatient => "Inpatient",
        Emergency => "Emergency",
        Surgery => "Surgery",
        Diagnostics => "Diagnostics",
        Rehabilitation => "Rehabilitation",
    }
}

choice_enum! {
    /// Kind of service delivered at an appointment.
    ServiceType {
        GeneralConsultation => "General Consultation",
        FollowUpVisit => "Follow-up Visit",
        AnnualPhysical => "Annual Physical",
        LabWork => "Lab Work",
        Imaging => "Imaging",
        Vaccination => "Vaccination",
        PhysicalTherapy => "Physical Therapy",
        SpecialistReferral => "Specialist Referral",
        TelehealthCheckIn => "Telehealth Check-in",
        UrgentCare => "Urgent Care",
    }
}

choice_enum! {
    /// Appointment lifecycle status.
    ///
    /// The pool splits by time: appointments that already started draw from
    /// `PAST_POOL`, future ones from `FUTURE_POOL`.
    AppointmentStatus {
        Scheduled => "Scheduled",
        Confirmed => "Confirmed",
        Rescheduled => "Rescheduled",
        Completed => "Completed",
        NoShow => "No Show",
        Cancelled => "Cancelled",
    }
}

impl AppointmentStatus {
    /// Statuses valid for appointments whose start time is in the past.
    pub const PAST_POOL: &'static [AppointmentStatus] = &[
        AppointmentStatus::Completed,
        AppointmentStatus::NoShow,
        AppointmentStatus::Cancelled,
    ];

    /// Statuses valid for appointments whose start time is in the future.
    pub const FUTURE_POOL: &'static [AppointmentStatus] = &[
        AppointmentStatus::Scheduled,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Rescheduled,
    ];
}

choice_enum! {
    /// Kind of care-journey activity.
    ActivityType {
        Consultation => "Consultation",
        LabTest => "Lab Test",
        Prescription => "Prescription",
        ImagingReview => "Imaging Review",
        CarePlanUpdate => "Care Plan Update",
        PhoneFollowUp => "Phone Follow-up",
        Referral => "Referral",
        Procedure => "Procedure",
    }
}

choice_enum! {
    /// Activity priority.
    ActivityPriority {
        Normal => "Normal",
        High => "High",
        Low => "Low",
        Urgent => "Urgent",
    }
}

choice_enum! {
    /// Activity duration in minutes.
    ActivityDuration {
        QuarterHour => "15",
        HalfHour => "30",
        ThreeQuarterHour => "45",
        FullHour => "60",
    }
}

impl ActivityDuration {
    /// Duration as a number of minutes.
    pub fn minutes(&self) -> i64 {
        match self {
            ActivityDuration::QuarterHour => 15,
            ActivityDuration::HalfHour => 30,
            ActivityDuration::ThreeQuarterHour => 45,
            ActivityDuration::FullHour => 60,
        }
    }
}
