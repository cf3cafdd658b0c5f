use crate::api::DashboardStats;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatTile {
    pub title: &'static str,
    pub value: u64,
    pub color: &'static str,
    pub icon: &'static str,
}

const USERS_ICON: &str = "M12 4.354a4 4 0 110 5.292M15 21H3v-1a6 6 0 0112 0v1zm0 0h6v-1a6 6 0 00-9-5.197M13 7a4 4 0 11-8 0 4 4 0 018 0z";
const CALENDAR_ICON: &str = "M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z";
const CHECK_ICON: &str = "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z";
const CROSS_ICON: &str = "M10 14l2-2m0 0l2-2m-2 2l-2-2m2 2l2 2m7-2a9 9 0 11-18 0 9 9 0 0118 0z";

/// The four dashboard tiles, in display order.
pub fn stat_tiles(stats: &DashboardStats) -> [StatTile; 4] {
    [
        StatTile {
            title: "Total Employees",
            value: stats.total_employees,
            color: "bg-blue-500",
            icon: USERS_ICON,
        },
        StatTile {
            title: "Attendance Today",
            value: stats.total_attendance_today,
            color: "bg-purple-500",
            icon: CALENDAR_ICON,
        },
        StatTile {
            title: "Present Today",
            value: stats.present_today,
            color: "bg-green-500",
            icon: CHECK_ICON,
        },
        StatTile {
            title: "Absent Today",
            value: stats.absent_today,
            color: "bg-red-500",
            icon: CROSS_ICON,
        },
    ]
}
