use super::ntc::NtC;

/// The reference conformers in declaration order.
///
/// Torsions are normalized into (-180, 180] degrees.
pub(super) static NTCS: [NtC; 96] = [
    NtC::new(
        "AA00",
        [82.08, -153.73, -72.09, -66.54, 172.56, 54.93, 81.86],
        [-161.33, -159.56],
        [5.45, 4.767, 18.24],
        [1.05, -25.94, 39.44, -39.7, 24.38],
        [0.13, -25.25, 39.17, -40.02, 25.17],
    ),
    NtC::new(
        "AA01",
        [81.46, -162.94, -68.98, 149.0, -167.99, -177.52, 85.41],
        [-155.8, -172.18],
        [5.275, 4.716, 13.67],
        [0.88, -24.45, 37.4, -37.8, 23.29],
        [5.07, -26.82, 37.15, -35.19, 19.03],
    ),
    NtC::new(
        "AA02",
        [87.99, -157.63, -85.85, -66.74, 160.56, 53.88, 88.23],
        [-115.16, -114.36],
        [5.219, 4.668, 17.88],
        [-17.4, -5.49, 24.25, -35.16, 33.23],
        [-11.14, -11.43, 27.82, -35.2, 29.39],
    ),
    NtC::new(
        "AA03",
        [80.06, -136.8, -96.3, -22.84, 155.41, 27.11, 80.33],
        [-168.1, -157.88],
        [5.655, 4.946, 16.14],
        [3.79, -26.78, 38.38, -37.11, 21.0],
        [3.02, -25.93, 37.75, -36.96, 21.4],
    ),
    NtC::new(
        "AA04",
        [80.18, -158.07, -61.16, -100.58, 175.12, 85.38, 79.67],
        [-160.81, -166.94],
        [5.387, 4.708, 19.19],
        [1.1, -24.61, 37.34, -37.68, 23.11],
        [-1.11, -22.98, 36.97, -38.59, 25.01],
    ),
    NtC::new(
        "AA05",
        [82.27, -146.23, -69.44, 139.74, -134.7, -177.51, 84.94],
        [-151.48, -175.85],
        [4.829, 4.327, 56.57],
        [3.67, -25.5, 36.46, -35.36, 20.03],
        [7.2, -27.38, 36.1, -32.95, 16.32],
    ),
    NtC::new(
        "AA06",
        [80.11, -145.8, -103.97, 135.45, -131.11, -179.93, 81.55],
        [-164.01, -179.75],
        [5.156, 4.585, 15.63],
        [1.35, -24.34, 36.78, -37.1, 22.56],
        [5.64, -27.15, 37.32, -35.12, 18.57],
    ),
    NtC::new(
        "AA07",
        [82.52, -116.66, -144.1, -64.28, 143.69, 52.71, 82.35],
        [-156.57, -156.89],
        [6.815, 6.805, -14.89],
        [0.92, -22.85, 34.89, -35.35, 21.74],
        [2.67, -24.48, 35.77, -35.19, 20.54],
    ),
    NtC::new(
        "AA08",
        [82.2, -126.54, -85.22, -54.08, 152.66, 55.37, 79.54],
        [-170.62, -163.08],
        [5.36, 4.602, 23.03],
        [5.63, -27.43, 37.69, -35.47, 18.84],
        [1.57, -25.37, 38.2, -38.29, 23.18],
    ),
    NtC::new(
        "AA09",
        [87.07, -128.46, -87.98, -58.34, 154.39, 52.24, 85.04],
        [-143.34, -126.98],
        [5.444, 4.705, 24.4],
        [-0.32, -19.51, 30.71, -31.76, 20.32],
        [-1.3, -19.77, 31.98, -33.69, 22.16],
    ),
    NtC::new(
        "AA10",
        [78.99, -157.23, -46.67, -149.98, 153.65, 143.25, 80.4],
        [-161.41, -176.8],
        [5.351, 4.801, 13.23],
        [1.7, -24.85, 37.35, -37.37, 22.52],
        [3.03, -25.15, 36.63, -35.88, 20.71],
    ),
    NtC::new(
        "AA11",
        [81.31, -99.45, -134.06, 91.23, -103.36, -167.67, 83.43],
        [-170.59, 178.83],
        [5.041, 4.605, 10.5],
        [3.6, -25.53, 36.57, -35.51, 20.13],
        [7.57, -27.95, 36.78, -33.38, 16.3],
    ),
    NtC::new(
        "AA12",
        [82.37, -162.27, -99.2, -61.69, 176.21, 49.65, 81.0],
        [-159.38, -162.91],
        [6.354, 6.245, -5.65],
        [2.38, -24.53, 36.15, -35.71, 21.08],
        [3.1, -25.98, 37.73, -36.94, 21.33],
    ),
    NtC::new(
        "AA13",
        [82.94, -169.99, -119.06, -53.43, 173.66, 50.26, 82.57],
        [-160.3, -168.08],
        [6.925, 7.277, -17.05],
        [1.49, -23.19, 34.78, -34.9, 21.14],
        [3.76, -25.57, 36.45, -35.26, 19.93],
    ),
    NtC::new(
        "AAS1",
        [78.53, -138.74, -58.75, -68.9, 171.11, 58.54, 80.63],
        [15.02, -164.07],
        [5.294, 4.367, 44.82],
        [-0.07, -23.62, 37.02, -38.04, 24.03],
        [3.41, -26.04, 37.55, -36.58, 20.95],
    ),
    NtC::new(
        "AB01",
        [86.28, -173.77, -78.84, -59.0, 178.53, 54.45, 141.82],
        [-137.23, -104.05],
        [5.282, 4.688, 17.72],
        [-19.74, -2.22, 21.66, -33.82, 33.65],
        [-20.8, 33.39, -32.77, 21.45, -0.49],
    ),
    NtC::new(
        "AB02",
        [93.78, 58.67, 55.69, -152.27, -171.57, 65.72, 130.51],
        [-121.17, -109.58],
        [4.811, 4.353, 23.29],
        [-19.81, 3.67, 12.48, -24.19, 27.75],
        [-29.19, 35.62, -28.42, 12.28, 10.49],
    ),
    NtC::new(
        "AB03",
        [103.02, -165.3, -105.49, -39.5, 161.6, 40.11, 136.29],
        [-131.53, -104.01],
        [5.131, 4.578, 22.53],
        [-36.77, 25.0, -5.0, -16.18, 33.17],
        [-27.49, 37.21, -32.64, 17.66, 6.02],
    ),
    NtC::new(
        "AB04",
        [86.6, -145.49, -62.84, -80.37, -151.08, 55.32, 139.05],
        [-166.4, -126.59],
        [6.572, 5.582, 7.84],
        [2.89, -24.6, 35.68, -34.94, 20.25],
        [-22.24, 32.55, -30.16, 18.03, 2.54],
    ),
    NtC::new(
        "AB05",
        [83.04, -146.43, -72.56, -56.95, 176.29, 58.31, 145.45],
        [-163.85, -121.16],
        [5.73, 4.82, 16.68],
        [0.81, -24.29, 37.08, -37.63, 23.31],
        [-23.07, 36.27, -34.87, 22.55, 0.16],
    ),
    NtC::new(
        "AB1S",
        [90.42, -146.28, -79.9, -65.07, 175.95, 55.69, 138.73],
        [-121.34, 67.92],
        [6.069, 5.433, 1.05],
        [2.84, -13.17, 27.78, -33.55, 3.75],
        [-27.8, 38.5, -42.05, 16.49, 3.15],
    ),
    NtC::new(
        "AB2S",
        [83.75, -139.7, -73.45, -53.19, 170.92, 52.55, 139.75],
        [-157.31, 69.42],
        [5.656, 4.782, 10.58],
        [-2.16, -19.95, 33.11, -35.3, 23.69],
        [-29.03, 38.41, -32.48, 16.69, 7.52],
    ),
    NtC::new(
        "BA01",
        [136.06, -171.31, -105.13, -60.46, 161.48, 53.28, 88.05],
        [-106.07, -134.7],
        [4.681, 4.161, 29.42],
        [-23.22, 33.42, -30.65, 17.7, 3.44],
        [-24.91, 4.01, 16.81, -32.03, 35.81],
    ),
    NtC::new(
        "BA05",
        [131.4, -175.64, -91.23, -64.09, 168.82, 52.31, 104.24],
        [-109.15, -124.6],
        [4.643, 4.106, 24.17],
        [-25.68, 32.68, -27.35, 13.05, 7.85],
        [-39.65, 28.61, -7.76, -15.13, 34.24],
    ),
    NtC::new(
        "BA08",
        [138.8, -152.0, -147.1, -59.31, 141.44, 49.0, 88.86],
        [-96.69, -145.18],
        [4.912, 4.433, 33.23],
        [-33.42, 42.89, -35.61, 17.4, 9.85],
        [-15.34, -5.82, 23.04, -32.36, 30.08],
    ),
    NtC::new(
        "BA09",
        [134.09, -160.12, -73.13, -103.59, 68.19, 171.69, 90.26],
        [-95.48, -173.95],
        [3.954, 3.807, 22.73],
        [-36.41, 42.92, -32.85, 13.01, 14.43],
        [-8.39, -10.83, 24.63, -30.3, 24.17],
    ),
    NtC::new(
        "BA10",
        [136.22, -159.81, -124.2, 95.17, -141.25, -154.94, 89.61],
        [-106.15, -159.52],
        [4.426, 3.988, 28.2],
        [-26.72, 35.58, -30.68, 16.06, 6.52],
        [-2.64, -18.31, 30.82, -33.17, 22.75],
    ),
    NtC::new(
        "BA13",
        [141.38, -140.11, -159.66, 81.88, -129.11, -163.73, 87.78],
        [-95.27, -162.6],
        [4.601, 4.154, 30.96],
        [-32.44, 43.07, -36.92, 19.32, 8.02],
        [3.99, -24.76, 35.1, -33.83, 18.8],
    ),
    NtC::new(
        "BA16",
        [146.48, -114.17, -170.41, 61.4, -131.44, -161.41, 84.77],
        [-94.08, -160.85],
        [4.815, 4.436, 28.76],
        [-31.26, 43.5, -38.5, 21.71, 5.77],
        [1.13, -22.72, 34.56, -34.86, 21.24],
    ),
    NtC::new(
        "BA17",
        [149.28, -106.76, 176.54, -65.1, 130.74, 44.22, 97.74],
        [-88.84, -127.43],
        [4.894, 4.548, 38.19],
        [-30.5, 44.04, -40.54, 24.55, 3.45],
        [-28.33, 13.74, 4.93, -21.52, 31.22],
    ),
    NtC::new(
        "BB00",
        [137.82, -176.89, -101.82, -56.28, 179.59, 44.23, 138.14],
        [-107.45, -101.75],
        [4.947, 4.373, 25.54],
        [-22.51, 33.24, -31.0, 18.59, 2.33],
        [-26.88, 36.96, -32.65, 17.88, 5.47],
    ),
    NtC::new(
        "BB01",
        [130.75, -179.05, -94.45, -58.6, 176.22, 48.62, 120.15],
        [-112.48, -116.12],
        [4.853, 4.303, 25.57],
        [-25.09, 32.11, -27.09, 13.0, 7.48],
        [-33.44, 33.47, -21.37, 2.29, 19.47],
    ),
    NtC::new(
        "BB02",
        [140.58, -166.05, -113.56, 30.93, -164.68, -62.9, 150.05],
        [-108.12, -106.66],
        [5.11, 4.458, 21.84],
        [-21.71, 34.05, -32.91, 21.06, 0.26],
        [-6.83, 23.26, -29.72, 26.41, -12.49],
    ),
    NtC::new(
        "BB03",
        [145.07, 175.18, -85.55, 162.78, 165.53, 174.65, 146.24],
        [-118.81, -127.04],
        [5.211, 4.512, 26.72],
        [-9.6, 24.73, -29.62, 24.61, -9.6],
        [-14.21, 29.12, -32.22, 24.65, -6.71],
    ),
    NtC::new(
        "BB04",
        [140.09, -158.71, -145.83, -45.25, 152.68, 46.11, 139.98],
        [-97.46, -107.44],
        [5.121, 4.648, 28.58],
        [-27.37, 38.07, -33.83, 18.88, 5.14],
        [-23.31, 34.91, -32.76, 19.97, 1.93],
    ),
    NtC::new(
        "BB05",
        [141.92, -140.07, -162.61, 76.4, -126.85, -146.75, 129.04],
        [-93.9, -151.55],
        [4.685, 4.189, 28.79],
        [-31.04, 41.72, -35.97, 19.26, 0.24],
        [-5.91, 22.48, -18.65, 12.02, 4.02],
    ),
    NtC::new(
        "BB07",
        [143.72, -112.66, 169.46, -63.5, 140.91, 46.12, 141.14],
        [-89.32, -99.62],
        [5.202, 4.955, 46.01],
        [-30.87, 42.16, -37.08, 20.39, 6.34],
        [-19.1, 32.3, -32.9, 22.46, -2.26],
    ),
    NtC::new(
        "BB08",
        [147.04, -111.07, -179.04, 66.3, -134.9, -151.49, 148.29],
        [-89.78, -125.11],
        [5.065, 4.691, 29.76],
        [-24.77, 38.73, -37.24, 23.99, 0.29],
        [-16.63, 31.97, -34.28, 25.44, -5.69],
    ),
    NtC::new(
        "BB10",
        [138.02, -164.19, -168.47, 21.95, 106.39, 18.94, 129.25],
        [-102.76, -102.22],
        [4.874, 4.389, 25.73],
        [-30.28, 40.97, -35.76, 19.37, 6.59],
        [-33.39, 39.97, -31.24, 12.95, 12.59],
    ),
    NtC::new(
        "BB11",
        [145.33, -160.65, -159.73, 122.97, -133.25, -172.63, 143.91],
        [-103.67, -137.4],
        [5.138, 4.648, 29.49],
        [-21.6, 35.49, -35.24, 23.52, -1.39],
        [-17.54, 31.0, -32.21, 22.58, -3.28],
    ),
    NtC::new(
        "BB12",
        [140.27, -164.38, -80.37, -103.13, 76.46, 171.35, 139.93],
        [-91.07, -155.24],
        [4.15, 3.866, 24.07],
        [-27.4, 38.03, -34.09, 19.13, 4.96],
        [-23.3, 34.52, -32.42, 19.73, 2.04],
    ),
    NtC::new(
        "BB13",
        [142.55, -172.55, -66.91, -140.72, 98.07, 161.21, 145.67],
        [-107.0, -141.43],
        [4.86, 4.359, 24.71],
        [-18.4, 32.0, -32.88, 22.86, -2.97],
        [-11.94, 27.69, -32.01, 25.73, -8.85],
    ),
    NtC::new(
        "BB14",
        [109.7, 104.08, -54.81, -140.39, -104.75, 82.61, 132.81],
        [-101.34, -95.12],
        [4.854, 4.332, 28.57],
        [-17.1, 28.26, -14.98, -2.59, 13.5],
        [-29.6, 38.86, -31.86, 14.97, 5.9],
    ),
    NtC::new(
        "BB15",
        [143.55, -170.86, -103.32, -15.21, -171.17, -9.81, 147.56],
        [-110.1, -97.6],
        [4.999, 4.374, 22.35],
        [-17.48, 31.66, -33.09, 23.74, -3.98],
        [-13.19, 29.03, -32.9, 25.96, -8.17],
    ),
    NtC::new(
        "BB16",
        [137.56, -139.32, -77.76, -75.63, 172.53, 47.58, 139.88],
        [-155.82, -89.9],
        [5.459, 4.897, 32.71],
        [-16.02, 26.92, -27.1, 18.39, -1.65],
        [-27.47, 38.31, -34.29, 19.34, 4.93],
    ),
    NtC::new(
        "BB17",
        [128.61, 144.73, -84.66, -129.92, -118.53, 79.29, 135.55],
        [-114.51, -90.36],
        [5.242, 4.609, 24.09],
        [-25.87, 33.85, -28.55, 14.32, 7.06],
        [-30.52, 39.86, -33.69, 17.22, 8.12],
    ),
    NtC::new(
        "BB1S",
        [139.29, -161.02, -79.0, -53.83, -101.95, -52.33, 151.23],
        [-122.62, 66.34],
        [6.588, 6.507, -2.59],
        [-39.63, 43.67, -37.91, 20.52, 1.32],
        [-5.22, 30.61, -36.03, 29.5, -16.23],
    ),
    NtC::new(
        "BB20",
        [142.6, -65.71, 109.51, 150.07, -161.22, 53.73, 151.67],
        [-98.6, -174.76],
        [5.233, 5.478, -83.38],
        [-29.84, 41.48, -36.53, 20.45, 5.66],
        [-7.66, 25.72, -32.82, 29.11, -13.65],
    ),
    NtC::new(
        "BB2S",
        [134.28, -165.81, -136.53, 46.11, -179.6, -70.03, 145.52],
        [-108.77, 66.29],
        [6.214, 6.003, -1.62],
        [-33.38, 41.55, -33.81, 15.37, 11.16],
        [-18.46, 34.0, -35.82, 26.01, -4.88],
    ),
    NtC::new(
        "BBS1",
        [146.33, -172.66, -85.56, -63.81, 171.66, 51.54, 134.92],
        [63.71, -100.27],
        [4.549, 3.937, 45.02],
        [-18.3, 33.72, -35.41, 25.7, -4.78],
        [-30.72, 39.18, -32.52, 15.65, 9.28],
    ),
    NtC::new(
        "IC01",
        [82.76, -140.31, -70.41, -62.82, -137.18, 54.38, 145.18],
        [-157.03, -76.6],
        [7.535, 7.245, 10.6],
        [0.56, -23.23, 35.73, -36.39, 22.6],
        [-24.72, 37.42, -35.19, 21.95, 1.54],
    ),
    NtC::new(
        "IC02",
        [81.89, -137.62, -80.56, -61.04, -135.22, 52.41, 143.3],
        [-158.57, -116.47],
        [7.847, 7.659, 1.88],
        [0.93, -23.38, 35.58, -36.06, 22.19],
        [-25.01, 36.97, -34.19, 20.77, 2.47],
    ),
    NtC::new(
        "IC03",
        [81.46, -121.1, -103.45, 69.41, 178.54, -58.67, 146.02],
        [-158.81, -94.46],
        [7.76, 7.5, -0.07],
        [-0.8, -22.08, 35.22, -36.68, 23.65],
        [-20.68, 34.13, -33.6, 22.68, -1.44],
    ),
    NtC::new(
        "IC04",
        [84.76, -153.84, -73.16, -165.92, -179.08, -176.58, 149.09],
        [-148.39, -115.55],
        [7.199, 6.967, 24.68],
        [1.7, -22.17, 32.95, -32.84, 19.65],
        [-18.76, 34.37, -35.99, 25.94, -4.63],
    ),
    NtC::new(
        "IC05",
        [140.84, -104.77, 173.84, -71.3, 178.43, 49.59, 146.97],
        [-86.53, -84.63],
        [7.114, 7.261, 45.6],
        [-39.41, 42.01, -33.5, 16.5, 10.15],
        [-10.09, 30.13, -35.33, 28.39, -9.57],
    ),
    NtC::new(
        "IC06",
        [136.51, -123.91, -79.7, -72.17, 174.16, 47.06, 141.78],
        [-153.0, -90.58],
        [6.232, 6.211, 39.52],
        [-21.32, 30.45, -28.38, 16.82, 2.97],
        [-33.66, 43.76, -37.6, 19.67, 8.6],
    ),
    NtC::new(
        "IC07",
        [84.29, -151.35, -68.52, 175.85, 127.02, 177.24, 82.99],
        [-141.92, -156.43],
        [7.354, 7.517, -26.83],
        [1.54, -24.99, 37.31, -37.51, 22.85],
        [0.35, -24.18, 37.24, -38.06, 23.99],
    ),
    NtC::new(
        "OP01",
        [82.63, -139.06, 122.0, -80.76, 144.5, 44.78, 81.73],
        [-155.35, -166.42],
        [7.39, 8.281, -164.67],
        [1.03, -24.21, 36.7, -37.13, 22.87],
        [1.56, -25.18, 37.75, -37.84, 22.96],
    ),
    NtC::new(
        "OP02",
        [83.1, -133.58, 156.11, -68.46, 159.28, 42.91, 86.33],
        [-153.08, 176.35],
        [8.25, 8.979, -100.51],
        [0.37, -22.63, 34.98, -35.8, 22.34],
        [8.08, -27.25, 35.01, -31.36, 14.73],
    ),
    NtC::new(
        "OP03",
        [77.75, -133.83, -59.53, 174.79, 137.98, 50.93, 83.67],
        [-160.67, -165.49],
        [7.458, 7.521, -157.88],
        [0.83, -25.12, 38.53, -39.09, 24.15],
        [0.97, -22.58, 34.33, -34.72, 21.34],
    ),
    NtC::new(
        "OP04",
        [80.11, -139.16, -75.27, 165.82, 171.42, 52.29, 84.85],
        [-154.12, -165.61],
        [7.147, 7.243, -154.02],
        [0.39, -24.4, 37.77, -38.52, 24.07],
        [3.35, -24.8, 35.62, -34.67, 19.79],
    ),
    NtC::new(
        "OP05",
        [78.42, -155.55, 50.33, 69.01, 126.12, 45.39, 84.4],
        [-159.0, -173.33],
        [8.922, 9.111, -96.2],
        [-1.13, -23.42, 37.71, -39.28, 25.55],
        [1.66, -23.05, 34.37, -34.33, 20.67],
    ),
    NtC::new(
        "OP06",
        [81.62, -147.44, 142.53, -59.12, 172.05, 47.71, 80.7],
        [-155.72, -158.94],
        [8.983, 10.121, -116.65],
        [-2.24, -20.51, 34.12, -36.36, 24.36],
        [1.29, -23.89, 36.14, -36.37, 22.14],
    ),
    NtC::new(
        "OP07",
        [81.99, -112.59, -166.16, -67.25, 149.02, 43.7, 80.96],
        [-163.53, -172.5],
        [7.506, 7.758, -36.13],
        [1.38, -23.66, 35.66, -35.87, 21.73],
        [5.2, -27.28, 37.87, -35.86, 19.36],
    ),
    NtC::new(
        "OP08",
        [79.86, -157.2, -81.72, -107.52, 83.0, 167.32, 84.08],
        [-159.0, 177.04],
        [5.941, 7.19, -42.06],
        [5.61, -28.92, 40.15, -37.86, 20.33],
        [9.64, -29.81, 37.69, -33.12, 14.86],
    ),
    NtC::new(
        "OP09",
        [81.92, -162.12, -91.3, -157.08, 146.65, 51.38, 147.88],
        [-156.33, -110.09],
        [6.722, 7.817, 162.57],
        [1.72, -23.65, 35.39, -35.36, 21.26],
        [-21.96, 36.14, -35.82, 24.08, -1.58],
    ),
    NtC::new(
        "OP10",
        [146.66, -142.34, 152.28, -71.23, 174.5, 39.62, 87.05],
        [-112.5, -174.01],
        [7.344, 7.753, 36.01],
        [-26.19, 39.15, -36.3, 22.15, 2.35],
        [10.95, -29.35, 35.7, -30.42, 12.34],
    ),
    NtC::new(
        "OP11",
        [147.03, -92.98, -59.02, -62.57, -173.0, 57.0, 83.95],
        [-125.47, -162.75],
        [7.801, 8.882, 110.16],
        [-22.66, 36.66, -35.97, 23.92, -0.98],
        [4.95, -27.58, 38.49, -36.63, 20.0],
    ),
    NtC::new(
        "OP12",
        [141.26, -102.51, -74.57, -84.68, -176.2, 42.74, 82.74],
        [-122.54, -168.74],
        [7.268, 7.506, 72.63],
        [-23.1, 34.68, -32.5, 20.15, 1.67],
        [3.77, -26.0, 37.09, -35.93, 20.29],
    ),
    NtC::new(
        "OP13",
        [146.31, -92.35, -111.76, 62.01, 153.45, 46.84, 85.84],
        [-120.7, -173.61],
        [8.914, 10.499, -171.5],
        [-23.3, 36.82, -35.57, 23.11, -0.09],
        [4.58, -24.48, 33.94, -32.27, 17.51],
    ),
    NtC::new(
        "OP14",
        [147.74, -90.5, -132.66, 57.88, -163.75, 60.7, 88.21],
        [-100.7, 175.99],
        [8.159, 9.562, -130.71],
        [-25.1, 38.52, -36.56, 23.07, 1.07],
        [6.16, -24.8, 32.87, -30.33, 15.3],
    ),
    NtC::new(
        "OP15",
        [148.61, -159.48, 151.33, -67.63, 148.55, 41.24, 85.51],
        [-95.4, -171.77],
        [6.611, 6.91, 22.31],
        [-23.94, 38.86, -38.1, 25.31, -1.07],
        [2.75, -23.49, 34.05, -33.41, 19.36],
    ),
    NtC::new(
        "OP16",
        [147.47, -91.78, 149.69, -51.3, 177.51, 47.48, 79.98],
        [-130.78, -165.28],
        [7.409, 8.859, 100.8],
        [-22.13, 36.2, -35.7, 23.89, -1.34],
        [2.41, -25.6, 37.82, -37.4, 22.09],
    ),
    NtC::new(
        "OP17",
        [145.2, -93.39, -66.26, -69.03, 137.7, 177.42, 83.81],
        [-126.09, -165.11],
        [7.875, 10.107, -169.36],
        [-21.72, 34.78, -33.94, 22.2, -0.52],
        [-1.75, -20.0, 32.93, -34.79, 23.14],
    ),
    NtC::new(
        "OP18",
        [149.01, -69.18, 105.84, 65.69, -161.61, 54.55, 147.22],
        [-135.37, -117.69],
        [6.536, 8.591, -129.93],
        [-20.49, 35.53, -36.13, 25.27, -3.21],
        [-22.73, 36.51, -35.65, 23.54, -0.73],
    ),
    NtC::new(
        "OP19",
        [144.89, -134.63, 64.28, 73.97, -173.79, -171.77, 125.56],
        [-110.27, -105.41],
        [7.348, 8.031, 20.38],
        [-19.95, 32.49, -32.33, 21.64, -1.2],
        [-32.57, 35.32, -24.73, 6.54, 16.19],
    ),
    NtC::new(
        "OP1S",
        [143.65, -153.36, 59.95, 82.45, -156.66, -168.67, 146.7],
        [-117.52, 68.2],
        [6.992, 7.55, 65.02],
        [-21.09, 34.19, -33.86, 22.53, -1.04],
        [-18.04, 34.19, -36.37, 26.87, -5.65],
    ),
    NtC::new(
        "OP20",
        [140.07, -88.97, -77.12, -62.42, -169.52, 55.65, 148.09],
        [-100.22, -142.87],
        [7.836, 8.562, 66.96],
        [-25.74, 35.5, -31.52, 17.53, 4.94],
        [-18.88, 34.46, -36.05, 26.11, -4.69],
    ),
    NtC::new(
        "OP21",
        [149.38, -117.79, 79.53, 66.73, 177.49, 62.49, 143.94],
        [-131.74, -116.09],
        [8.237, 10.261, -115.4],
        [-19.62, 35.44, -36.96, 26.6, -4.54],
        [-20.23, 33.77, -33.88, 23.05, -1.92],
    ),
    NtC::new(
        "OP22",
        [147.16, -115.29, 125.59, -74.12, 161.54, 48.75, 141.95],
        [-126.87, -129.11],
        [6.437, 6.926, 44.33],
        [-20.51, 34.97, -35.56, 24.74, -2.82],
        [-22.98, 34.61, -32.49, 20.03, 1.74],
    ),
    NtC::new(
        "OP23",
        [147.44, -99.88, 167.8, -88.27, 80.49, 175.19, 148.9],
        [-139.37, -101.47],
        [5.49, 6.978, 60.24],
        [-25.02, 38.76, -36.92, 23.48, 0.78],
        [-28.33, 43.09, -40.6, 25.28, 1.68],
    ),
    NtC::new(
        "OP24",
        [147.69, -75.52, 96.35, 81.93, -112.22, -170.33, 84.52],
        [-117.94, -174.97],
        [3.975, 5.212, 91.01],
        [-23.83, 37.88, -36.65, 23.89, -0.24],
        [8.88, -28.77, 36.78, -32.63, 15.02],
    ),
    NtC::new(
        "OP25",
        [145.13, -99.41, 177.94, 94.65, -151.45, 63.44, 85.98],
        [-76.84, -168.18],
        [7.209, 8.071, -100.11],
        [-24.39, 36.81, -34.69, 21.55, 1.62],
        [2.34, -23.94, 35.05, -34.65, 20.44],
    ),
    NtC::new(
        "OP26",
        [144.93, -94.52, 161.05, -149.04, 166.13, 49.76, 81.15],
        [-120.01, -169.13],
        [6.921, 6.959, 15.71],
        [-20.9, 33.8, -33.13, 21.99, -0.84],
        [4.45, -26.78, 37.74, -36.15, 20.06],
    ),
    NtC::new(
        "OP27",
        [156.85, -99.91, 70.8, 92.54, 162.04, 170.23, 82.06],
        [-148.75, -164.62],
        [7.461, 8.093, 3.54],
        [-17.14, 35.52, -39.27, 30.46, -8.57],
        [-3.18, -18.97, 32.61, -35.37, 24.38],
    ),
    NtC::new(
        "OP28",
        [82.47, -134.5, 166.19, -68.26, 159.42, 43.17, 144.63],
        [-163.76, -127.19],
        [7.922, 8.573, -124.53],
        [0.35, -23.4, 36.34, -37.06, 23.17],
        [-23.34, 36.09, -34.46, 21.92, 0.68],
    ),
    NtC::new(
        "OP29",
        [81.91, -117.19, -106.06, 71.62, -174.29, 58.91, 85.58],
        [-153.44, -174.81],
        [8.566, 9.564, 143.71],
        [-0.42, -22.56, 35.59, -36.79, 23.53],
        [5.16, -25.54, 35.27, -33.19, 17.73],
    ),
    NtC::new(
        "OP30",
        [82.12, -115.68, -164.28, 75.55, 171.43, 49.37, 89.46],
        [-163.03, -178.93],
        [9.675, 10.477, 80.55],
        [0.83, -23.01, 35.26, -35.7, 21.98],
        [6.81, -24.55, 32.04, -29.01, 14.11],
    ),
    NtC::new(
        "OP31",
        [82.7, -145.86, 63.86, 67.06, 103.95, -174.77, 81.67],
        [-149.63, -173.88],
        [9.301, 9.618, 55.51],
        [1.06, -23.7, 36.11, -36.47, 22.34],
        [4.11, -26.5, 37.71, -36.32, 20.32],
    ),
    NtC::new(
        "OPS1",
        [146.34, -96.73, -71.22, -76.89, -175.98, 53.06, 82.36],
        [62.73, -167.82],
        [7.504, 8.21, 93.81],
        [-24.14, 37.73, -36.09, 23.16, 0.38],
        [4.44, -26.21, 36.85, -35.28, 19.44],
    ),
    NtC::new(
        "ZZ01",
        [81.45, -149.77, 48.84, 165.87, 149.51, 48.91, 147.29],
        [-152.37, -134.39],
        [6.019, 4.612, -54.01],
        [0.95, -23.42, 35.73, -36.16, 22.25],
        [-22.86, 36.89, -36.08, 23.86, -0.86],
    ),
    NtC::new(
        "ZZ02",
        [144.08, -90.63, 78.27, -131.46, 174.6, 55.14, 86.37],
        [-127.86, -83.14],
        [6.198, 6.217, 60.81],
        [-22.99, 35.07, -33.18, 20.89, 1.16],
        [4.47, -23.92, 33.08, -31.44, 17.14],
    ),
    NtC::new(
        "ZZ1S",
        [147.07, -97.3, 76.1, 66.26, -174.05, 178.35, 95.62],
        [-153.43, 60.97],
        [6.264, 6.389, -1.08],
        [-26.34, 37.89, -34.69, 20.92, 3.43],
        [-4.21, -12.73, 23.52, -26.62, 19.1],
    ),
    NtC::new(
        "ZZ2S",
        [141.24, -97.18, 71.06, 77.75, 179.9, -175.21, 146.77],
        [-151.88, 76.58],
        [6.238, 6.366, -4.13],
        [-27.66, 37.79, -33.38, 18.26, 5.81],
        [-18.29, 32.28, -33.46, 23.79, -3.44],
    ),
    NtC::new(
        "ZZS1",
        [97.14, -116.54, -67.2, -149.83, -129.03, 55.64, 144.06],
        [63.21, -154.44],
        [6.782, 5.663, -28.12],
        [-5.88, -10.62, 21.64, -25.62, 19.73],
        [-27.83, 38.12, -33.9, 19.17, 5.35],
    ),
    NtC::new(
        "ZZS2",
        [94.87, -173.35, 64.06, 168.69, 161.84, 44.04, 142.85],
        [56.24, -147.37],
        [6.737, 5.675, -30.55],
        [-4.61, -12.5, 23.73, -26.86, 19.73],
        [-27.38, 37.33, -33.26, 18.73, 5.47],
    ),
];
