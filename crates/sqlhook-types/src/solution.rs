//! The SQL answer submitted to the test webhook.

/// Final query for the assigned question: every employee with the number of
/// younger colleagues in the same department, newest employee id first.
///
/// Submitted byte-for-byte, trailing newline included.
pub const FINAL_QUERY: &str = concat!(
    "SELECT\n",
    "  e.emp_id,\n",
    "  e.first_name,\n",
    "  e.last_name,\n",
    "  d.department_name,\n",
    "  (\n",
    "    SELECT COUNT(*)\n",
    "    FROM employee e2\n",
    "    WHERE e2.department = e.department\n",
    "      AND e2.dob > e.dob\n",
    "  ) AS younger_employees_count\n",
    "FROM employee e\n",
    "JOIN department d ON e.department = d.department_id\n",
    "ORDER BY e.emp_id DESC;\n",
);
